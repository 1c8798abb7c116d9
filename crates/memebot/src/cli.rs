//! Command-line interface definitions and wiring.

use clap::{Parser, Subcommand};
use memebot::{
    CommandInvocation, CommandRegistry, ConsoleNotifier, MemeCommand, MemeListCommand,
    MemebotResult, MemegenClient, MemegenConfig, TemplateCache,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Memebot command-line interface.
#[derive(Debug, Parser)]
#[command(name = "memebot", about = "Generate memes from chat-style commands", version)]
pub struct Cli {
    /// Path to a TOML config file (endpoint, timeout)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Sender attached to the invocation
    #[arg(long, default_value = "cli")]
    pub sender: String,

    /// Room attached to the invocation
    #[arg(long, default_value = "terminal")]
    pub room: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a meme: meme <template> <top line> [bottom line]
    Meme {
        /// Arguments as the chat host would split them
        args: Vec<String>,
    },

    /// List available meme templates
    MemeList,
}

/// Build the command registry and dispatch one invocation.
pub async fn run(cli: Cli) -> MemebotResult<()> {
    let config = match &cli.config {
        Some(path) => MemegenConfig::from_file(path)?,
        None => MemegenConfig::default(),
    };

    let client = Arc::new(MemegenClient::new(&config)?);
    let cache = Arc::new(TemplateCache::new());
    let notifier = Arc::new(ConsoleNotifier::new());

    let mut registry = CommandRegistry::new();
    registry.register(MemeCommand::new(
        Arc::clone(&cache),
        Arc::clone(&client) as _,
        Arc::clone(&client) as _,
        Arc::clone(&notifier) as _,
    ));
    registry.register(MemeListCommand::new(
        cache,
        client as _,
        notifier as _,
    ));

    let (name, args) = match cli.command {
        Commands::Meme { args } => ("meme", args),
        Commands::MemeList => ("meme-list", Vec::new()),
    };

    let invocation = CommandInvocation::new(cli.sender, cli.room, args);
    registry.dispatch(name, &invocation).await
}
