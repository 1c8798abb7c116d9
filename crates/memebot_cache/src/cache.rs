//! Template cache implementation.

use memebot_core::TemplateEntry;
use memebot_error::FetchError;
use std::future::Future;
use tokio::sync::Mutex;

/// Process-wide cache of meme templates.
///
/// An append-only ordered sequence of [`TemplateEntry`], created empty and
/// populated at most once for as long as a population attempt has succeeded.
/// "Populated" means non-empty: a failed fetch leaves the cache empty, so the
/// next invocation retries.
///
/// Intended usage is one shared instance injected into every command handler.
///
/// # Example
///
/// ```
/// use memebot_cache::TemplateCache;
/// use memebot_core::TemplateEntry;
///
/// # tokio_test::block_on(async {
/// let cache = TemplateCache::new();
/// cache
///     .append_all(vec![TemplateEntry::new("Alpha", "https://t/A", "A")])
///     .await;
/// assert_eq!(cache.render_listing().await, "*A*: _Alpha_\n");
/// # });
/// ```
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: Mutex<Vec<TemplateEntry>>,
}

impl TemplateCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        tracing::debug!("Creating new TemplateCache");
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Check if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Append entries, preserving prior contents and arrival order.
    pub async fn append_all(&self, new_entries: Vec<TemplateEntry>) {
        let mut entries = self.entries.lock().await;
        tracing::debug!(
            appended = new_entries.len(),
            total = entries.len() + new_entries.len(),
            "Appending entries to template cache"
        );
        entries.extend(new_entries);
    }

    /// Populate the cache through `fetch` if it is still empty.
    ///
    /// The cache lock is held across the fetch, so concurrent first-time
    /// invocations cannot issue duplicate fetches or interleave appends; late
    /// arrivals observe the populated cache and return without fetching.
    ///
    /// Returns `true` if a fetch was issued and its entries appended, `false`
    /// if the cache was already populated. A fetch failure leaves the cache
    /// empty and eligible for retry.
    pub async fn populate_with<F, Fut>(&self, fetch: F) -> Result<bool, FetchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<TemplateEntry>, FetchError>> + Send,
    {
        let mut entries = self.entries.lock().await;
        if !entries.is_empty() {
            tracing::debug!(cached = entries.len(), "Template cache already populated");
            return Ok(false);
        }

        let fetched = fetch().await?;
        tracing::info!(fetched = fetched.len(), "Populated template cache");
        entries.extend(fetched);
        Ok(true)
    }

    /// Render the listing: one line per entry, `*{name}*: _{title}_`, in
    /// cache order. An empty cache renders an empty string.
    pub async fn render_listing(&self) -> String {
        let entries = self.entries.lock().await;
        let mut lines = String::new();
        for entry in entries.iter() {
            lines.push_str(&format!("*{}*: _{}_\n", entry.name, entry.title));
        }
        lines
    }

    /// Snapshot of the cached entries.
    pub async fn entries(&self) -> Vec<TemplateEntry> {
        self.entries.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memebot_error::FetchErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn entry(name: &str, title: &str) -> TemplateEntry {
        TemplateEntry::new(
            title,
            format!("https://memegen.link/api/templates/{name}"),
            name,
        )
    }

    #[tokio::test]
    async fn empty_cache_renders_empty_string() {
        let cache = TemplateCache::new();
        assert!(cache.is_empty().await);
        assert_eq!(cache.render_listing().await, "");
    }

    #[tokio::test]
    async fn listing_renders_in_cache_order() {
        let cache = TemplateCache::new();
        cache
            .append_all(vec![entry("A", "Alpha"), entry("B", "Beta")])
            .await;

        assert_eq!(cache.render_listing().await, "*A*: _Alpha_\n*B*: _Beta_\n");
    }

    #[tokio::test]
    async fn append_preserves_prior_contents() {
        let cache = TemplateCache::new();
        cache.append_all(vec![entry("A", "Alpha")]).await;
        cache.append_all(vec![entry("B", "Beta")]).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.entries().await[0].name, "A");
    }

    #[tokio::test]
    async fn populate_fetches_only_once() {
        let cache = TemplateCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            cache
                .populate_with(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![entry("A", "Alpha")])
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn failed_populate_leaves_cache_empty_and_retryable() {
        let cache = TemplateCache::new();
        let calls = AtomicUsize::new(0);

        let result = cache
            .populate_with(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FetchError::new(FetchErrorKind::Status(503)))
            })
            .await;
        assert!(result.is_err());
        assert!(cache.is_empty().await);

        let fetched = cache
            .populate_with(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![entry("A", "Alpha")])
            })
            .await
            .unwrap();
        assert!(fetched);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_populate_is_single_flight() {
        use std::sync::Arc;

        let cache = Arc::new(TemplateCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .populate_with(|| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        Ok(vec![entry("A", "Alpha")])
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }
}
