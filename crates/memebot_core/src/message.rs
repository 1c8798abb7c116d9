//! Outbound message payloads.

use serde::{Deserialize, Serialize};

/// An image attachment on a posted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment title, shown alongside the image
    pub title: String,
    /// URL of the rendered image
    pub image_url: String,
}

impl Attachment {
    /// Create a new image attachment.
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}

/// A message posted to a room on behalf of a sender.
///
/// # Examples
///
/// ```
/// use memebot_core::{Attachment, OutgoingMessage};
///
/// let message = OutgoingMessage::new(
///     "alice",
///     "general",
///     Attachment::new("doge", "https://img/x.png"),
/// );
/// assert_eq!(message.attachment.title, "doge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// The sender the message is posted as
    pub sender: String,
    /// The room the message is posted to
    pub room: String,
    /// The attachment carried by the message
    pub attachment: Attachment,
}

impl OutgoingMessage {
    /// Create a new posted message.
    pub fn new(
        sender: impl Into<String>,
        room: impl Into<String>,
        attachment: Attachment,
    ) -> Self {
        Self {
            sender: sender.into(),
            room: room.into(),
            attachment,
        }
    }
}
