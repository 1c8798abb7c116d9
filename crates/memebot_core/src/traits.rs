//! Trait seams between the command layer and its collaborators.

use crate::{OutgoingMessage, TemplateEntry};
use async_trait::async_trait;
use memebot_error::{FetchError, GenerateError, MemebotResult};

/// Fetches the meme template catalog from the upstream provider.
///
/// Implementations perform one GET against the catalog endpoint and decode
/// the body into typed entries. They never touch the template cache; cache
/// population is the caller's responsibility.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    /// Fetch all templates known to the upstream provider.
    ///
    /// Success requires transport-level success, an OK status, and a
    /// non-empty body. Entry order follows the upstream mapping's iteration
    /// order, which is not stable across calls.
    async fn fetch_templates(&self) -> Result<Vec<TemplateEntry>, FetchError>;
}

/// Renders a meme image from a template and two text lines.
#[async_trait]
pub trait MemeGenerator: Send + Sync {
    /// Generate a meme and return the rendered image URL.
    ///
    /// `bottom` may be the empty string when the caller supplied only a top
    /// line. Text lines are passed through without URL-encoding; characters
    /// with path-segment meaning reach the upstream literally.
    async fn generate(
        &self,
        template: &str,
        top: &str,
        bottom: &str,
    ) -> Result<String, GenerateError>;
}

/// Host-provided outbound message delivery.
///
/// Two distinct modes: [`Notifier::notify`] is an ephemeral plain-text
/// notification visible only to the invoking sender (usage errors and
/// listings), while [`Notifier::post`] publishes a room-visible message with
/// an image attachment (successful generation).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an ephemeral plain-text notification to a single sender.
    async fn notify(&self, sender: &str, text: &str) -> MemebotResult<()>;

    /// Post a message with an attachment, visible to the room.
    async fn post(&self, message: OutgoingMessage) -> MemebotResult<()>;
}
