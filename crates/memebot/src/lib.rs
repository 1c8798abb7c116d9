//! Memebot - meme generation chat commands backed by memegen.link.
//!
//! Memebot is a thin integration layer between a chat host's command
//! dispatch and the memegen.link HTTP API: `meme <template> <top> [bottom]`
//! posts a rendered image to the room, and `meme-list` (or the legacy
//! `meme list` alias) lists the known templates.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memebot::{
//!     CommandInvocation, CommandRegistry, ConsoleNotifier, MemeCommand,
//!     MemeListCommand, MemegenClient, MemegenConfig, TemplateCache,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(MemegenClient::new(&MemegenConfig::default())?);
//!     let cache = Arc::new(TemplateCache::new());
//!     let notifier = Arc::new(ConsoleNotifier::new());
//!
//!     let mut registry = CommandRegistry::new();
//!     registry.register(MemeCommand::new(
//!         Arc::clone(&cache),
//!         Arc::clone(&client) as _,
//!         Arc::clone(&client) as _,
//!         Arc::clone(&notifier) as _,
//!     ));
//!     registry.register(MemeListCommand::new(cache, client as _, notifier as _));
//!
//!     let invocation = CommandInvocation::new("alice", "general", vec![]);
//!     registry.dispatch("meme-list", &invocation).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Memebot is organized as a workspace with focused crates:
//!
//! - `memebot_error` - Error types
//! - `memebot_core` - Core data types and collaborator traits
//! - `memebot_cache` - In-memory template catalog cache
//! - `memebot_api` - memegen.link HTTP client
//! - `memebot_social` - Command registry and handlers
//!
//! This crate (`memebot`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use memebot_api::{MemegenClient, MemegenConfig};
pub use memebot_cache::TemplateCache;
pub use memebot_core::{
    Attachment, CommandInvocation, MemeGenerator, Notifier, OutgoingMessage, TemplateCatalog,
    TemplateEntry,
};
pub use memebot_error::{
    CommandError, CommandErrorKind, ConfigError, FetchError, FetchErrorKind, GenerateError,
    GenerateErrorKind, HttpError, MemebotError, MemebotErrorKind, MemebotResult, ValidationError,
};
pub use memebot_social::{
    CommandRegistry, ConsoleNotifier, GENERATE_FAILED_MESSAGE, LIST_FAILED_MESSAGE, MemeCommand,
    MemeListCommand, SlashCommand, USAGE_MESSAGE,
};
