//! Core knowledge type definitions.
//!
//! Defines [`QuestionKind`] (the three question words a fact can answer),
//! [`EntityRecord`] (one stored entity with up to three response slots), and
//! [`KnowledgeError`].

use thiserror::Error;

use super::tokens_match;

/// Errors from the knowledge store and question-word parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    /// The entity was never stored, or it has no response for this kind.
    ///
    /// The two cases are deliberately merged: the learning flow treats both
    /// as "I don't know" and prompts the user either way.
    #[error("no stored response for {kind} \"{entity}\"")]
    NotFound { kind: QuestionKind, entity: String },
    /// A token that is not one of the three question words.
    #[error("not a question word: {0:?}")]
    InvalidKind(String),
}

/// The three question words the agent understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    What,
    Where,
    Who,
}

impl QuestionKind {
    /// All kinds, in the order sections are written to a knowledge file.
    pub const ALL: [QuestionKind; 3] = [Self::What, Self::Where, Self::Who];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::What => "what",
            Self::Where => "where",
            Self::Who => "who",
        }
    }

    /// Slot index inside an [`EntityRecord`].
    fn slot(self) -> usize {
        match self {
            Self::What => 0,
            Self::Where => 1,
            Self::Who => 2,
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionKind {
    type Err = KnowledgeError;

    /// Case-insensitive, so it also serves section-header recognition.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| tokens_match(s, kind.as_str()))
            .ok_or_else(|| KnowledgeError::InvalidKind(s.to_string()))
    }
}

/// A single stored entity and its response slots.
///
/// The entity string keeps the capitalization it was first stored with;
/// lookups against it are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct EntityRecord {
    /// Case-preserved display form of the entity.
    pub entity: String,
    /// One optional response per question kind.
    responses: [Option<String>; 3],
}

impl EntityRecord {
    /// New record with all slots empty.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            responses: Default::default(),
        }
    }

    /// The response stored for `kind`, if any.
    pub fn response(&self, kind: QuestionKind) -> Option<&str> {
        self.responses[kind.slot()].as_deref()
    }

    /// Set (or overwrite) the response for `kind`.
    ///
    /// Empty and absent are the same thing in this model, so an empty
    /// response clears the slot instead of storing an empty string.
    pub fn set_response(&mut self, kind: QuestionKind, response: String) {
        self.responses[kind.slot()] = if response.is_empty() {
            None
        } else {
            Some(response)
        };
    }
}
