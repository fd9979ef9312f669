#![allow(dead_code)]

use std::path::PathBuf;

use loqui::knowledge::store::KnowledgeStore;
use loqui::knowledge::types::QuestionKind;
use loqui::session::{Session, Turn};
use tempfile::TempDir;

/// A small store with a few facts across all three kinds.
pub fn seeded_store() -> KnowledgeStore {
    let mut store = KnowledgeStore::new();
    store.put(QuestionKind::What, "sun", "a star");
    store.put(
        QuestionKind::Where,
        "sun",
        "at the center of the solar system",
    );
    store.put(QuestionKind::What, "rust", "a systems programming language");
    store.put(QuestionKind::Who, "linus", "the creator of Linux");
    store
}

/// Write `contents` to `name` inside the temp dir and return the full path.
pub fn kb_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Tokenize `line` the way the chat harness does and dispatch it.
pub fn dispatch(session: &mut Session, line: &str) -> Turn {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    session.handle_line(&tokens)
}

/// Dispatch and unwrap a plain reply; panics on a prompt or farewell.
pub fn reply(session: &mut Session, line: &str) -> String {
    match dispatch(session, line) {
        Turn::Reply(text) => text,
        other => panic!("expected a reply, got {other:?}"),
    }
}
