//! Command registry and handler trait.

use async_trait::async_trait;
use memebot_core::CommandInvocation;
use memebot_error::{CommandError, CommandErrorKind, MemebotResult};
use std::collections::HashMap;
use std::sync::Arc;

/// A named chat command.
///
/// Implementations hold their collaborators (cache, catalog, generator,
/// notifier) and surface every invocation-level failure as an ephemeral
/// notification to the sender; `execute` only errors when outbound delivery
/// itself fails.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// The command name the host dispatches on (e.g., "meme").
    fn name(&self) -> &str;

    /// One-line description for help surfaces.
    fn description(&self) -> &str;

    /// Handle one invocation.
    async fn execute(&self, invocation: &CommandInvocation) -> MemebotResult<()>;
}

/// Registry of chat commands, consulted by the host's dispatch mechanism.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(MemeCommand::new(cache, catalog, generator, notifier));
///
/// registry.dispatch("meme", &invocation).await?;
/// ```
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn SlashCommand>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        tracing::debug!("Creating new CommandRegistry");
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its own name.
    pub fn register<C: SlashCommand + 'static>(&mut self, command: C) -> &mut Self {
        let name = command.name().to_string();
        tracing::info!(command = %name, "Registering chat command");
        self.commands.insert(name, Arc::new(command));
        self
    }

    /// Get the handler registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.commands.get(name)
    }

    /// Dispatch one invocation to the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no handler is registered under `name` or if the
    /// handler's outbound delivery fails.
    #[tracing::instrument(
        skip(self, invocation),
        fields(
            sender = %invocation.sender,
            arg_count = invocation.args.len()
        )
    )]
    pub async fn dispatch(
        &self,
        name: &str,
        invocation: &CommandInvocation,
    ) -> MemebotResult<()> {
        tracing::debug!("Dispatching chat command");

        let command = self.get(name).ok_or_else(|| {
            tracing::error!(
                command = %name,
                available = ?self.names(),
                "Command not found in registry"
            );
            CommandError::new(CommandErrorKind::CommandNotFound(name.to_string()))
        })?;

        command.execute(invocation).await
    }

    /// List all registered command names.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Check if a command is registered.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
