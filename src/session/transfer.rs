//! Moving knowledge between the store and files on disk.
//!
//! `load` and `save` share the same filename grammar: every token after the
//! intent word (and an optional connective, "from" for load, "as"/"to" for
//! save) joined with single spaces, so filenames may contain interior
//! spaces. File handles live only for the duration of the operation.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::knowledge::codec;
use crate::knowledge::tokens_match;

use super::{Pending, Session, Turn};

/// Join the tokens after the intent word into a filename, skipping an
/// optional leading connective. `None` when no filename tokens remain.
fn filename(tokens: &[&str], connectives: &[&str]) -> Option<String> {
    let mut rest = &tokens[1..];
    if let Some(first) = rest.first() {
        if connectives.iter().any(|c| tokens_match(first, c)) {
            rest = &rest[1..];
        }
    }
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

/// Handle `load [from] <filename>`.
pub(super) fn load(session: &mut Session, tokens: &[&str]) -> Turn {
    let Some(path) = filename(tokens, &["from"]) else {
        return Turn::Reply("Filename cannot be empty!".into());
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path = path.as_str(), %err, "could not open knowledge file");
            return Turn::Reply("File not found!".into());
        }
    };

    match codec::read(BufReader::new(file), &mut session.store) {
        Ok(count) => {
            info!(count, path = path.as_str(), "knowledge loaded");
            Turn::Reply(format!("Loaded {count} responses from {path}."))
        }
        Err(err) => Turn::Reply(format!("Invalid knowledge file: {err}.")),
    }
}

/// Handle `save [as|to] <filename>`.
///
/// Saving over an existing file requires consent, so this returns a prompt
/// turn and the actual write happens in [`confirm_overwrite`].
pub(super) fn save(session: &mut Session, tokens: &[&str]) -> Turn {
    let Some(path) = filename(tokens, &["as", "to"]) else {
        return Turn::Reply("Filename cannot be empty!".into());
    };

    if Path::new(&path).exists() {
        return Turn::Prompt {
            prompt: format!("{path} exists. Overwrite? [y/n]"),
            pending: Pending::Overwrite { path },
        };
    }
    write_store(session, &path)
}

/// Resume after the overwrite prompt. Consent is the first non-whitespace
/// character of the answer, case-folded; only `y` proceeds.
pub(super) fn confirm_overwrite(session: &mut Session, path: &str, answer: &str) -> Turn {
    let consent = answer.trim().chars().next().map(|c| c.to_ascii_lowercase());
    if consent != Some('y') {
        return Turn::Reply("Operation aborted.".into());
    }
    write_store(session, path)
}

fn write_store(session: &Session, path: &str) -> Turn {
    if session.store.is_empty() {
        warn!(path, "saving an empty knowledge store");
    }
    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            warn!(path, %err, "could not create knowledge file");
            return Turn::Reply(format!("Unable to write to {path}."));
        }
    };

    let mut writer = BufWriter::new(file);
    let result = codec::write(&mut writer, &session.store)
        .and_then(|()| writer.flush().map_err(Into::into));
    match result {
        Ok(()) => {
            info!(path, entities = session.store.len(), "knowledge saved");
            Turn::Reply(format!(
                "Saved {} entities to {path}.",
                session.store.len()
            ))
        }
        Err(err) => Turn::Reply(format!("Unable to write to {path}: {err}.")),
    }
}

#[cfg(test)]
mod tests {
    use super::filename;

    #[test]
    fn connective_is_optional_and_skipped() {
        assert_eq!(filename(&["load", "kb.ini"], &["from"]), Some("kb.ini".into()));
        assert_eq!(
            filename(&["load", "from", "kb.ini"], &["from"]),
            Some("kb.ini".into())
        );
        assert_eq!(
            filename(&["save", "AS", "kb.ini"], &["as", "to"]),
            Some("kb.ini".into())
        );
    }

    #[test]
    fn interior_spaces_are_preserved() {
        assert_eq!(
            filename(&["load", "from", "my", "knowledge.ini"], &["from"]),
            Some("my knowledge.ini".into())
        );
    }

    #[test]
    fn missing_filename_is_none() {
        assert_eq!(filename(&["load"], &["from"]), None);
        assert_eq!(filename(&["load", "from"], &["from"]), None);
        assert_eq!(filename(&["save", "to"], &["as", "to"]), None);
    }
}
