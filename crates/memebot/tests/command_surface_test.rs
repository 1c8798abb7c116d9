//! End-to-end tests for the registered command surface, with the upstream
//! API and the host notifier replaced by in-process doubles.

use async_trait::async_trait;
use memebot::{
    CommandErrorKind, CommandInvocation, CommandRegistry, FetchError, GenerateError,
    GenerateErrorKind, MemeCommand, MemeGenerator, MemeListCommand, MemebotErrorKind,
    MemebotResult, Notifier, OutgoingMessage, TemplateCache, TemplateCatalog, TemplateEntry,
    USAGE_MESSAGE,
};
use std::sync::{Arc, Mutex};

/// Catalog double serving a fixed set of templates.
struct FixedCatalog {
    entries: Vec<TemplateEntry>,
}

#[async_trait]
impl TemplateCatalog for FixedCatalog {
    async fn fetch_templates(&self) -> Result<Vec<TemplateEntry>, FetchError> {
        Ok(self.entries.clone())
    }
}

/// Generator double echoing a deterministic image URL.
struct EchoGenerator;

#[async_trait]
impl MemeGenerator for EchoGenerator {
    async fn generate(
        &self,
        template: &str,
        _top: &str,
        _bottom: &str,
    ) -> Result<String, GenerateError> {
        if template == "missing" {
            return Err(GenerateError::new(GenerateErrorKind::Status(404)));
        }
        Ok(format!("https://img/{template}.png"))
    }
}

/// Notifier double recording deliveries.
#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<String>>,
    posts: Mutex<Vec<OutgoingMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, _sender: &str, text: &str) -> MemebotResult<()> {
        self.notifications.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn post(&self, message: OutgoingMessage) -> MemebotResult<()> {
        self.posts.lock().unwrap().push(message);
        Ok(())
    }
}

fn build_registry(notifier: Arc<RecordingNotifier>) -> CommandRegistry {
    let cache = Arc::new(TemplateCache::new());
    let catalog = Arc::new(FixedCatalog {
        entries: vec![TemplateEntry::new(
            "Doge",
            "https://memegen.link/api/templates/doge",
            "doge",
        )],
    });

    let mut registry = CommandRegistry::new();
    registry.register(MemeCommand::new(
        Arc::clone(&cache),
        Arc::clone(&catalog) as _,
        Arc::new(EchoGenerator) as _,
        Arc::clone(&notifier) as _,
    ));
    registry.register(MemeListCommand::new(cache, catalog as _, notifier as _));
    registry
}

fn invocation(args: &[&str]) -> CommandInvocation {
    CommandInvocation::new("alice", "general", args.iter().map(|a| a.to_string()).collect())
}

#[tokio::test]
async fn meme_command_posts_generated_image() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(Arc::clone(&notifier));

    registry
        .dispatch("meme", &invocation(&["doge", "such test", "very pass"]))
        .await
        .unwrap();

    let posts = notifier.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].attachment.title, "doge");
    assert_eq!(posts[0].attachment.image_url, "https://img/doge.png");
}

#[tokio::test]
async fn meme_command_with_one_argument_notifies_usage() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(Arc::clone(&notifier));

    registry.dispatch("meme", &invocation(&["doge"])).await.unwrap();

    assert_eq!(
        *notifier.notifications.lock().unwrap(),
        vec![USAGE_MESSAGE.to_string()]
    );
    assert!(notifier.posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_template_notifies_failure() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(Arc::clone(&notifier));

    registry
        .dispatch("meme", &invocation(&["missing", "top"]))
        .await
        .unwrap();

    assert_eq!(notifier.notifications.lock().unwrap().len(), 1);
    assert!(notifier.posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn meme_list_notifies_rendered_listing() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(Arc::clone(&notifier));

    registry.dispatch("meme-list", &invocation(&[])).await.unwrap();

    assert_eq!(
        *notifier.notifications.lock().unwrap(),
        vec!["*doge*: _Doge_\n".to_string()]
    );
}

#[tokio::test]
async fn legacy_list_alias_shares_the_listing_flow() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(Arc::clone(&notifier));

    registry.dispatch("meme", &invocation(&["list"])).await.unwrap();

    assert_eq!(
        *notifier.notifications.lock().unwrap(),
        vec!["*doge*: _Doge_\n".to_string()]
    );
}

#[tokio::test]
async fn unknown_command_is_a_dispatch_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let registry = build_registry(notifier);

    let err = registry
        .dispatch("meme-generate", &invocation(&[]))
        .await
        .unwrap_err();

    match err.kind() {
        MemebotErrorKind::Command(command_err) => {
            assert!(matches!(
                &command_err.kind,
                CommandErrorKind::CommandNotFound(name) if name == "meme-generate"
            ));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}
