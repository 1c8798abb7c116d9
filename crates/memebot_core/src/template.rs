//! Meme template catalog entries.

use serde::{Deserialize, Serialize};

/// One meme template known to the upstream catalog.
///
/// `name` is the short identifier accepted by the generation endpoint; it is
/// derived from `url` by removing the catalog endpoint prefix.
///
/// # Examples
///
/// ```
/// use memebot_core::TemplateEntry;
///
/// let entry = TemplateEntry::new(
///     "Alpha",
///     "https://memegen.link/api/templates/A",
///     "A",
/// );
/// assert_eq!(entry.name, "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Human-readable template title from the catalog
    pub title: String,
    /// Full template URL as listed in the catalog
    pub url: String,
    /// Short template identifier used in generation requests
    pub name: String,
}

impl TemplateEntry {
    /// Create a new catalog entry.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            name: name.into(),
        }
    }
}
