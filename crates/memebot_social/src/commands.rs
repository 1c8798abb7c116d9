//! The `meme` and `meme-list` command handlers.

use crate::SlashCommand;
use async_trait::async_trait;
use memebot_cache::TemplateCache;
use memebot_core::{Attachment, CommandInvocation, MemeGenerator, Notifier, OutgoingMessage, TemplateCatalog};
use memebot_error::MemebotResult;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Canonical usage message for `meme` invocations with too few arguments.
pub const USAGE_MESSAGE: &str = "Invalid arguments. Usage: meme <template> <top line> [bottom line]";

/// Canonical notification when the template catalog could not be retrieved.
pub const LIST_FAILED_MESSAGE: &str = "Failed to retrieve meme list.";

/// Canonical notification when meme generation failed.
pub const GENERATE_FAILED_MESSAGE: &str =
    "Failed to generate meme. Check the template name with meme-list.";

/// Shared listing flow used by `meme-list` and the legacy `meme list` alias.
///
/// Populates the cache through the catalog on first use; a fetch failure is
/// notified to the sender and leaves the cache empty so the next invocation
/// retries. An empty listing is delivered as-is, not treated as an error.
async fn run_list_flow(
    cache: &TemplateCache,
    catalog: &dyn TemplateCatalog,
    notifier: &dyn Notifier,
    invocation: &CommandInvocation,
) -> MemebotResult<()> {
    if let Err(e) = cache.populate_with(|| catalog.fetch_templates()).await {
        warn!(error = %e, "Failed to retrieve template catalog");
        return notifier.notify(&invocation.sender, LIST_FAILED_MESSAGE).await;
    }

    let listing = cache.render_listing().await;
    notifier.notify(&invocation.sender, &listing).await
}

/// The `meme` command: generates an image from a template and two text lines
/// and posts it to the room as an attachment.
///
/// `meme list` is a deprecated alias for the listing flow, kept for
/// compatibility with an older command surface; it shares the canonical
/// messages and gains no new behavior.
#[derive(derive_new::new)]
pub struct MemeCommand {
    cache: Arc<TemplateCache>,
    catalog: Arc<dyn TemplateCatalog>,
    generator: Arc<dyn MemeGenerator>,
    notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl SlashCommand for MemeCommand {
    fn name(&self) -> &str {
        "meme"
    }

    fn description(&self) -> &str {
        "Generate a meme."
    }

    #[instrument(
        skip(self, invocation),
        fields(
            command = "meme",
            sender = %invocation.sender,
            arg_count = invocation.args.len()
        )
    )]
    async fn execute(&self, invocation: &CommandInvocation) -> MemebotResult<()> {
        if invocation
            .arg(0)
            .is_some_and(|arg| arg.trim().eq_ignore_ascii_case("list"))
        {
            debug!("Legacy list alias invoked");
            return run_list_flow(
                &self.cache,
                self.catalog.as_ref(),
                self.notifier.as_ref(),
                invocation,
            )
            .await;
        }

        if invocation.args.len() < 2 {
            let err = memebot_error::ValidationError::new(USAGE_MESSAGE);
            debug!(error = %err, args = ?invocation.args, "Invalid arguments");
            return self.notifier.notify(&invocation.sender, USAGE_MESSAGE).await;
        }

        let template = &invocation.args[0];
        let top = &invocation.args[1];
        let bottom = invocation.arg(2).unwrap_or("");

        match self.generator.generate(template, top, bottom).await {
            Err(e) => {
                warn!(error = %e, template = %template, "Meme generation failed");
                self.notifier
                    .notify(&invocation.sender, GENERATE_FAILED_MESSAGE)
                    .await
            }
            Ok(image_url) => {
                debug!(image_url = %image_url, "Posting generated meme");
                self.notifier
                    .post(OutgoingMessage::new(
                        &invocation.sender,
                        &invocation.room,
                        Attachment::new(template, image_url),
                    ))
                    .await
            }
        }
    }
}

/// The `meme-list` command: notifies the sender with the template listing.
#[derive(derive_new::new)]
pub struct MemeListCommand {
    cache: Arc<TemplateCache>,
    catalog: Arc<dyn TemplateCatalog>,
    notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl SlashCommand for MemeListCommand {
    fn name(&self) -> &str {
        "meme-list"
    }

    fn description(&self) -> &str {
        "Get a list of valid meme templates"
    }

    #[instrument(
        skip(self, invocation),
        fields(command = "meme-list", sender = %invocation.sender)
    )]
    async fn execute(&self, invocation: &CommandInvocation) -> MemebotResult<()> {
        run_list_flow(
            &self.cache,
            self.catalog.as_ref(),
            self.notifier.as_ref(),
            invocation,
        )
        .await
    }
}
