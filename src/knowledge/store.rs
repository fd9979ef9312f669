//! The in-memory fact store.
//!
//! [`KnowledgeStore`] keeps one [`EntityRecord`] per distinct entity
//! (case-insensitive), in insertion order. Insertion order is what the codec
//! replays when the store is written back to a file.

use tracing::debug;

use super::tokens_match;
use super::types::{EntityRecord, KnowledgeError, QuestionKind};

/// Ordered collection of entity records, owned by the session.
///
/// Created empty, populated by [`put`](Self::put) or the codec read path,
/// cleared by [`reset`](Self::reset). Nothing is persisted implicitly; the
/// store lives in memory until it is explicitly saved.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    records: Vec<EntityRecord>,
}

impl KnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored response for a question.
    ///
    /// Scans records in insertion order for the first entity match. An entity
    /// that was never stored and an entity whose slot for `kind` is empty are
    /// both [`KnowledgeError::NotFound`].
    pub fn get(&self, kind: QuestionKind, entity: &str) -> Result<&str, KnowledgeError> {
        self.records
            .iter()
            .find(|r| tokens_match(&r.entity, entity))
            .and_then(|r| r.response(kind))
            .ok_or_else(|| KnowledgeError::NotFound {
                kind,
                entity: entity.to_string(),
            })
    }

    /// Insert or overwrite the response for `(kind, entity)`.
    ///
    /// An existing record keeps its position and its originally stored
    /// capitalization; a new entity is appended after all existing records.
    pub fn put(&mut self, kind: QuestionKind, entity: &str, response: impl Into<String>) {
        let response = response.into();
        match self
            .records
            .iter_mut()
            .find(|r| tokens_match(&r.entity, entity))
        {
            Some(record) => record.set_response(kind, response),
            None => {
                debug!(entity, kind = %kind, "new entity record");
                let mut record = EntityRecord::new(entity);
                record.set_response(kind, response);
                self.records.push(record);
            }
        }
    }

    /// Discard every record. Subsequent lookups are all `NotFound` until the
    /// store is repopulated.
    pub fn reset(&mut self) {
        debug!(entities = self.records.len(), "knowledge store reset");
        self.records.clear();
    }

    /// Ordered read-only traversal, used by the codec write path.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> {
        self.records.iter()
    }

    /// Number of distinct entities stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of non-empty responses stored for `kind`.
    pub fn count_for(&self, kind: QuestionKind) -> usize {
        self.records
            .iter()
            .filter(|r| r.response(kind).is_some())
            .count()
    }
}
