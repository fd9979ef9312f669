//! The question handler: lookup, and the learning flow for misses.

use tracing::info;

use crate::knowledge::tokens_match;
use crate::knowledge::types::QuestionKind;

use super::{Pending, Session, Turn};

/// Answer a question utterance, or ask the user to teach us.
///
/// `tokens[0]` is the question word; an optional "is"/"are" after it is
/// skipped; the remaining tokens joined with spaces form the entity.
pub(super) fn ask(session: &mut Session, tokens: &[&str]) -> Turn {
    // The classifier gated on the first token, so this parse cannot fail in
    // normal dispatch; the guard covers direct callers.
    let Ok(kind) = tokens[0].parse::<QuestionKind>() else {
        return Turn::Reply("I do not understand your question.".into());
    };

    if tokens.len() < 2 {
        return Turn::Reply("That is not a valid question.".into());
    }

    // "what is X" and "what X" ask the same thing.
    let rest = if tokens_match(tokens[1], "is") || tokens_match(tokens[1], "are") {
        &tokens[2..]
    } else {
        &tokens[1..]
    };
    let entity = rest.join(" ");
    if entity.is_empty() {
        return Turn::Reply("I do not understand your question.".into());
    }

    match session.store.get(kind, &entity) {
        Ok(answer) => Turn::Reply(answer.to_string()),
        Err(_) => Turn::Prompt {
            prompt: format!("I don't know. {}?", tokens.join(" ")),
            pending: Pending::Answer { kind, entity },
        },
    }
}

/// Store a freshly taught answer, unless the user gave us nothing.
pub(super) fn learn(
    session: &mut Session,
    kind: QuestionKind,
    entity: String,
    answer: &str,
) -> Turn {
    let answer = answer.trim();
    if answer.is_empty() {
        return Turn::Reply(">:(".into());
    }
    info!(kind = %kind, entity = entity.as_str(), "learned a new response");
    session.store.put(kind, &entity, answer);
    Turn::Reply("Thank you.".into())
}
