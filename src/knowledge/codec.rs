//! Reading and writing the section-based knowledge file format.
//!
//! A knowledge file has three sections, `[what]`, `[where]`, and `[who]`,
//! each holding `entity=response` lines. [`read`] replays a file into a
//! store; [`write`] emits a store in the fixed section order:
//!
//! ```text
//! [what]
//! sun=a star
//!
//! [where]
//! sun=at the center of the solar system
//!
//! [who]
//! ```
//!
//! Sections may appear in any order (and any case) on read; blank lines are
//! visual spacing and are skipped.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::store::KnowledgeStore;
use super::types::QuestionKind;

/// Failure while reading or writing a knowledge file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Section header naming something other than what/where/who.
    #[error("line {line}: unknown section [{name}]")]
    UnknownSection { line: usize, name: String },
    /// Section header with no closing bracket.
    #[error("line {line}: section header has no closing ']'")]
    UnterminatedHeader { line: usize },
    /// Fact line without an `=` separator.
    #[error("line {line}: expected entity=response")]
    MissingDelimiter { line: usize },
    /// Fact line with nothing before the `=`.
    #[error("line {line}: fact line has no entity")]
    EmptyEntity { line: usize },
    /// Fact line before the first section header.
    #[error("line {line}: fact appears before any section header")]
    NoActiveSection { line: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse a knowledge file into `store`.
///
/// Stops at the first malformed line; pairs inserted before the failure stay
/// in the store. Returns the number of entity/response pairs inserted.
pub fn read(input: impl BufRead, store: &mut KnowledgeStore) -> Result<usize, CodecError> {
    let mut active: Option<QuestionKind> = None;
    let mut count = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .split_once(']')
                .ok_or(CodecError::UnterminatedHeader { line: lineno })?
                .0;
            active = Some(name.parse().map_err(|_| CodecError::UnknownSection {
                line: lineno,
                name: name.to_string(),
            })?);
            continue;
        }

        // Blank lines and lines opening with whitespace are spacing.
        if line.is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }

        let kind = active.ok_or(CodecError::NoActiveSection { line: lineno })?;
        let (entity, response) = line
            .split_once('=')
            .ok_or(CodecError::MissingDelimiter { line: lineno })?;
        if entity.is_empty() {
            return Err(CodecError::EmptyEntity { line: lineno });
        }
        // Tolerate CRLF files.
        let response = response.strip_suffix('\r').unwrap_or(response);
        store.put(kind, entity, response);
        count += 1;
    }

    debug!(count, "knowledge file parsed");
    Ok(count)
}

/// Write `store` to `output` in the fixed section order what, where, who.
///
/// Each section lists, in insertion order, the records whose slot for that
/// kind is non-empty; records with an empty slot produce no line at all. A
/// blank line precedes every section except the first.
pub fn write(output: &mut impl Write, store: &KnowledgeStore) -> Result<(), CodecError> {
    for (i, kind) in QuestionKind::ALL.into_iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "[{kind}]")?;
        for record in store.iter() {
            if let Some(response) = record.response(kind) {
                writeln!(output, "{}={}", record.entity, response)?;
            }
        }
    }
    Ok(())
}
