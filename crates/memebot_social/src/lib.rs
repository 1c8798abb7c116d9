//! Chat command routing for memebot.
//!
//! This crate provides the command surface a chat host dispatches into:
//!
//! - `SlashCommand` - Trait implemented by each command handler
//! - `CommandRegistry` - Registry mapping command names to handlers
//! - `MemeCommand` / `MemeListCommand` - The `meme` and `meme-list` handlers
//! - `ConsoleNotifier` - Terminal-backed [`memebot_core::Notifier`] for the CLI
//!
//! Handlers are plain structs closing over injected collaborators (cache,
//! catalog, generator, notifier); there is no inheritance and no ambient
//! state.
//!
//! # Example
//!
//! ```rust,ignore
//! use memebot_social::{CommandRegistry, MemeCommand, MemeListCommand};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(MemeCommand::new(cache, catalog, generator, notifier));
//! registry.register(MemeListCommand::new(cache, catalog, notifier));
//!
//! registry.dispatch("meme", &invocation).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod notifier;
mod registry;

pub use commands::{
    GENERATE_FAILED_MESSAGE, LIST_FAILED_MESSAGE, MemeCommand, MemeListCommand, USAGE_MESSAGE,
};
pub use notifier::ConsoleNotifier;
pub use registry::{CommandRegistry, SlashCommand};
