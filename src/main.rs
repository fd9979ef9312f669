mod cli;
mod config;
mod knowledge;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loqui",
    version,
    about = "Line-oriented conversational agent with a teachable knowledge base"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session
    Chat {
        /// Knowledge file to preload before the first prompt
        #[arg(long)]
        kb: Option<PathBuf>,
    },
    /// Show statistics for a knowledge file
    Stats {
        /// Knowledge file to inspect
        file: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for names and log level)
    let config = config::LoquiConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for the conversation.
    let filter = EnvFilter::try_new(&config.chat.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Chat { kb } => cli::chat::chat(&config, kb.as_deref()),
        Command::Stats { file, json } => cli::stats::stats(&file, json),
    }
}
