//! CLI `stats` command — summarize a knowledge file without starting a chat.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::knowledge::codec;
use crate::knowledge::store::KnowledgeStore;
use crate::knowledge::types::QuestionKind;

/// Counts reported by `loqui stats`.
#[derive(Debug, Serialize)]
struct StatsReport {
    file: String,
    entities: usize,
    responses: usize,
    by_kind: BTreeMap<String, usize>,
}

/// Parse `file` into a fresh store and print its statistics.
pub fn stats(file: &Path, json: bool) -> Result<()> {
    let input = File::open(file)
        .with_context(|| format!("failed to open knowledge file: {}", file.display()))?;

    let mut store = KnowledgeStore::new();
    let responses = codec::read(BufReader::new(input), &mut store)
        .with_context(|| format!("failed to parse knowledge file: {}", file.display()))?;

    let by_kind: BTreeMap<String, usize> = QuestionKind::ALL
        .into_iter()
        .map(|kind| (kind.to_string(), store.count_for(kind)))
        .collect();

    let report = StatsReport {
        file: file.display().to_string(),
        entities: store.len(),
        responses,
        by_kind,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Knowledge File Statistics");
    println!("{}", "=".repeat(40));
    println!("  File:       {}", report.file);
    println!("  Entities:   {}", report.entities);
    println!("  Responses:  {}", report.responses);
    println!();

    println!("By Kind:");
    for kind in QuestionKind::ALL {
        let count = report.by_kind.get(kind.as_str()).copied().unwrap_or(0);
        println!("  {:<8} {}", kind, count);
    }

    Ok(())
}
