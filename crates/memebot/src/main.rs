//! Memebot CLI binary.
//!
//! This binary provides command-line access to the memebot command surface:
//! - Generate a meme from a template and two text lines
//! - List the templates known to the upstream catalog

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::Cli;

    // Load .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    cli::run(cli).await?;

    Ok(())
}
