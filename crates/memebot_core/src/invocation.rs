//! Per-invocation command context.

use serde::{Deserialize, Serialize};

/// The context a host hands to a command handler for one invocation.
///
/// Ephemeral: nothing here is retained across invocations.
///
/// # Examples
///
/// ```
/// use memebot_core::CommandInvocation;
///
/// let invocation = CommandInvocation::new("alice", "general", vec!["doge".into(), "wow".into()]);
/// assert_eq!(invocation.args.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// The user who issued the command
    pub sender: String,
    /// The room the command was issued in
    pub room: String,
    /// Ordered command arguments, already split by the host
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Create a new invocation context.
    pub fn new(sender: impl Into<String>, room: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            sender: sender.into(),
            room: room.into(),
            args,
        }
    }

    /// Argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
