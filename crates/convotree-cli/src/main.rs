//! Convotree CLI application
//!
//! An interactive loop over a branching conversation tree:
//!
//! ```text
//! chat <message>              # send a message on the current branch
//! branch <name> [checkpoint]  # create a branch (defaults to the current head)
//! switch <name>               # change the active branch
//! list                        # show branches and checkpoints
//! history [branch]            # replay a branch's exchanges
//! quit                        # leave
//! ```

mod args;
mod commands;
mod console;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use convotree_core::{Conversation, ConversationTree, ConvoConfig, build_generator};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.resolve_config_path();
    let mut config = ConvoConfig::load(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::debug!(config = ?config, path = %config_path.display(), "configuration loaded");

    let generator = build_generator(&config.generator).context("building response generator")?;
    let conversation = Conversation::new(ConversationTree::new(), generator);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    commands::interactive::run(&conversation, stdin, stdout).await?;
    Ok(())
}
