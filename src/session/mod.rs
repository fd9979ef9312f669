//! One conversational session: intent dispatch and the handlers behind it.
//!
//! [`Session::handle_line`] takes a tokenized utterance and returns a
//! [`Turn`]. Handlers never block on input themselves; when one needs a
//! follow-up answer from the user (an unanswered question, an overwrite
//! confirmation) it returns [`Turn::Prompt`] carrying the prompt text and a
//! [`Pending`] value, and the harness calls [`Session::resume`] with
//! whatever the user typed.

pub mod intent;
mod question;
mod smalltalk;
mod transfer;

use crate::knowledge::store::KnowledgeStore;
use crate::knowledge::types::QuestionKind;
use intent::{classify, Intent};

/// What the harness should do after a dispatch.
#[derive(Debug, PartialEq, Eq)]
pub enum Turn {
    /// Print the reply and read the next utterance.
    Reply(String),
    /// Print the reply and end the session.
    Farewell(String),
    /// Print the prompt, read one free-text line, and call
    /// [`Session::resume`] with it.
    Prompt { prompt: String, pending: Pending },
}

/// Handler state carried across a [`Turn::Prompt`] round trip.
#[derive(Debug, PartialEq, Eq)]
pub enum Pending {
    /// An unanswered question: store the user's answer under (kind, entity).
    Answer { kind: QuestionKind, entity: String },
    /// Overwrite consent for a save targeting an existing file.
    Overwrite { path: String },
}

/// A single conversation: the knowledge store plus intent dispatch.
#[derive(Debug, Default)]
pub struct Session {
    store: KnowledgeStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Mutable store access, used by the harness to preload a knowledge file.
    pub fn store_mut(&mut self) -> &mut KnowledgeStore {
        &mut self.store
    }

    /// Dispatch one tokenized utterance.
    pub fn handle_line(&mut self, tokens: &[&str]) -> Turn {
        let Some(first) = tokens.first() else {
            return Turn::Reply(String::new());
        };
        match classify(first) {
            Intent::Exit => Turn::Farewell("Goodbye!".into()),
            Intent::Smalltalk => smalltalk::respond(tokens),
            Intent::Load => transfer::load(self, tokens),
            Intent::Question => question::ask(self, tokens),
            Intent::Reset => {
                self.store.reset();
                Turn::Reply("Reset completed successfully!".into())
            }
            Intent::Save => transfer::save(self, tokens),
            Intent::Unrecognized => Turn::Reply(format!("I don't understand \"{first}\".")),
        }
    }

    /// Continue a turn that asked the user for input.
    pub fn resume(&mut self, pending: Pending, answer: &str) -> Turn {
        match pending {
            Pending::Answer { kind, entity } => question::learn(self, kind, entity, answer),
            Pending::Overwrite { path } => transfer::confirm_overwrite(self, &path, answer),
        }
    }
}
