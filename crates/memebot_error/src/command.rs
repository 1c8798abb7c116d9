//! Command dispatch errors.

use derive_more::{Display, Error};

/// Specific command dispatch error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum CommandErrorKind {
    /// No handler registered under the requested command name.
    #[display("Command not found: {}", _0)]
    CommandNotFound(String),

    /// Outbound message delivery failed.
    #[display("Delivery failed for '{}': {}", command, reason)]
    DeliveryFailed {
        /// Command whose response could not be delivered
        command: String,
        /// Underlying delivery failure
        reason: String,
    },
}

/// Command dispatch error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The specific error condition
    pub kind: CommandErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CommandError {
    /// Create a new CommandError from a kind at the current location.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
