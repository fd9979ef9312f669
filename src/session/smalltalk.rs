//! Canned smalltalk responses.

use crate::knowledge::tokens_match;

use super::Turn;

/// Respond to a smalltalk utterance. `tokens[0]` is already known to be one
/// of the smalltalk keywords.
pub(super) fn respond(tokens: &[&str]) -> Turn {
    let first = tokens[0];
    if tokens_match(first, "how") {
        if tokens.last().is_some_and(|t| tokens_match(t, "you")) {
            Turn::Reply("Not too bad, can't complain.".into())
        } else {
            Turn::Reply("How what now?".into())
        }
    } else if tokens_match(first, "it's") {
        let rest = tokens[1..].join(" ");
        if rest.is_empty() {
            Turn::Reply("Indeed it's.".into())
        } else {
            Turn::Reply(format!("Indeed it's {rest}."))
        }
    } else if tokens_match(first, "hello") || tokens_match(first, "hi") {
        Turn::Reply("Hello!".into())
    } else if tokens_match(first, "goodbye") || tokens_match(first, "bye") {
        Turn::Farewell("Goodbye".into())
    } else {
        // "target" is the only word left in the smalltalk set.
        Turn::Reply("Eliminated".into())
    }
}
