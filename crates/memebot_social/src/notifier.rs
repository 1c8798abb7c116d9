//! Terminal-backed notifier for the CLI binary.

use async_trait::async_trait;
use memebot_core::{Notifier, OutgoingMessage};
use memebot_error::MemebotResult;

/// Notifier that prints deliveries to the terminal.
///
/// Stands in for a chat host's delivery primitive when memebot runs as a
/// standalone CLI: ephemeral notifications and room posts both land on
/// stdout, prefixed by their mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, sender: &str, text: &str) -> MemebotResult<()> {
        println!("[notify @{sender}]\n{text}");
        Ok(())
    }

    async fn post(&self, message: OutgoingMessage) -> MemebotResult<()> {
        println!(
            "[#{} @{}] {}: {}",
            message.room, message.sender, message.attachment.title, message.attachment.image_url
        );
        Ok(())
    }
}
