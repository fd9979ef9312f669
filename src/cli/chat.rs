//! The interactive chat loop.
//!
//! The harness owns all terminal I/O: it reads a line, splits it on
//! whitespace, hands the tokens to the session, and prints the reply behind
//! the bot name label. When the session asks a follow-up question (the
//! learning flow, overwrite consent) the harness reads one more line and
//! resumes the turn with it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::LoquiConfig;
use crate::knowledge::codec;
use crate::session::{Session, Turn};

/// Run an interactive session until an exit intent or EOF.
///
/// `kb` overrides the configured default knowledge file; either is loaded
/// before the first prompt.
pub fn chat(config: &LoquiConfig, kb: Option<&Path>) -> Result<()> {
    let mut session = Session::new();

    let preload = kb
        .map(Path::to_path_buf)
        .or_else(|| config.resolved_kb_path());
    if let Some(path) = preload {
        let file = std::fs::File::open(&path)
            .with_context(|| format!("failed to open knowledge file: {}", path.display()))?;
        let count = codec::read(io::BufReader::new(file), session.store_mut())
            .with_context(|| format!("failed to parse knowledge file: {}", path.display()))?;
        info!(
            count,
            entities = session.store().len(),
            path = %path.display(),
            "preloaded knowledge file"
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let bot = &config.chat.bot_name;

    println!("{bot}: Hello! Ask me what, where, or who questions. Say exit to leave.");

    loop {
        print!("{}: ", config.chat.user_name);
        stdout.flush()?;
        let Some(line) = read_line(&stdin)? else {
            break; // EOF ends the session like an exit
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut turn = session.handle_line(&tokens);

        // A turn may need one follow-up answer before it settles.
        let stop = loop {
            match turn {
                Turn::Prompt { prompt, pending } => {
                    print!("{bot}: {prompt} ");
                    stdout.flush()?;
                    let Some(answer) = read_line(&stdin)? else {
                        return Ok(());
                    };
                    turn = session.resume(pending, &answer);
                }
                Turn::Reply(text) => {
                    if !text.is_empty() {
                        println!("{bot}: {text}");
                    }
                    break false;
                }
                Turn::Farewell(text) => {
                    println!("{bot}: {text}");
                    break true;
                }
            }
        };
        if stop {
            break;
        }
    }
    Ok(())
}

/// Read one line from stdin; `None` on EOF.
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
