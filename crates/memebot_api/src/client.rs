//! memegen.link HTTP client.

use crate::MemegenConfig;
use memebot_core::{MemeGenerator, TemplateCatalog, TemplateEntry};
use memebot_error::{FetchError, FetchErrorKind, GenerateError, GenerateErrorKind, HttpError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Generation response body. Only the masked direct link is used.
#[derive(Debug, Deserialize)]
struct GenerationBody {
    direct: DirectLinks,
}

#[derive(Debug, Deserialize)]
struct DirectLinks {
    masked: String,
}

/// memegen.link API client.
///
/// Implements [`TemplateCatalog`] for the catalog fetch and [`MemeGenerator`]
/// for image generation. Both calls treat status 200 plus a non-empty body as
/// success and anything else as failure.
#[derive(Debug, Clone)]
pub struct MemegenClient {
    client: Client,
    endpoint: String,
}

impl MemegenClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &MemegenConfig) -> Result<Self, HttpError> {
        debug!(
            endpoint = %config.endpoint,
            timeout_secs = config.timeout_secs,
            "Creating new memegen client"
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetches the template catalog and decodes it into typed entries.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_catalog(&self) -> Result<Vec<TemplateEntry>, FetchError> {
        debug!("Fetching template catalog");

        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            error!(error = ?e, "Catalog request failed");
            FetchError::new(FetchErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, "Catalog endpoint returned non-OK status");
            return Err(FetchError::new(FetchErrorKind::Status(status.as_u16())));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read catalog body");
            FetchError::new(FetchErrorKind::Transport(e.to_string()))
        })?;
        if body.trim().is_empty() {
            error!("Catalog endpoint returned an empty body");
            return Err(FetchError::new(FetchErrorKind::EmptyBody));
        }

        let catalog: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to decode catalog body");
            FetchError::new(FetchErrorKind::Decode(e.to_string()))
        })?;

        let entries = parse_catalog(&self.endpoint, &catalog)?;
        debug!(templates = entries.len(), "Fetched template catalog");
        Ok(entries)
    }

    /// Renders a meme and returns the masked image URL.
    #[instrument(skip(self))]
    pub async fn generate_meme(
        &self,
        template: &str,
        top: &str,
        bottom: &str,
    ) -> Result<String, GenerateError> {
        let url = build_generation_url(&self.endpoint, template, top, bottom);
        debug!(url = %url, "Requesting meme generation");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = ?e, "Generation request failed");
            GenerateError::new(GenerateErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(status = %status, template, "Generation endpoint returned non-OK status");
            return Err(GenerateError::new(GenerateErrorKind::Status(
                status.as_u16(),
            )));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read generation body");
            GenerateError::new(GenerateErrorKind::Transport(e.to_string()))
        })?;
        if body.trim().is_empty() {
            error!("Generation endpoint returned an empty body");
            return Err(GenerateError::new(GenerateErrorKind::EmptyBody));
        }

        let generated: GenerationBody = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to decode generation body");
            GenerateError::new(GenerateErrorKind::Decode(e.to_string()))
        })?;

        debug!(image_url = %generated.direct.masked, "Generated meme");
        Ok(generated.direct.masked)
    }
}

/// Builds the generation URL by exact concatenation.
///
/// No URL-encoding is applied to the text lines; slashes and spaces reach the
/// upstream path-segment parser literally. This mirrors the upstream contract
/// as observed and must not be changed to encode.
fn build_generation_url(endpoint: &str, template: &str, top: &str, bottom: &str) -> String {
    format!("{endpoint}{template}/{top}/{bottom}")
}

/// Decodes the catalog mapping into typed entries.
///
/// The body must be a JSON object mapping title to template URL. Entries with
/// a non-string URL are skipped with a warning rather than failing the whole
/// catalog. `name` is derived by removing the first occurrence of the
/// endpoint prefix from the URL.
fn parse_catalog(
    endpoint: &str,
    catalog: &serde_json::Value,
) -> Result<Vec<TemplateEntry>, FetchError> {
    let mapping = catalog.as_object().ok_or_else(|| {
        FetchError::new(FetchErrorKind::Decode(
            "catalog body is not a JSON object".to_string(),
        ))
    })?;

    let mut entries = Vec::with_capacity(mapping.len());
    for (title, url_value) in mapping {
        let Some(url) = url_value.as_str() else {
            warn!(title = %title, "Skipping catalog entry with non-string URL");
            continue;
        };
        let name = url.replacen(endpoint, "", 1);
        entries.push(TemplateEntry::new(title, url, name));
    }
    Ok(entries)
}

#[async_trait::async_trait]
impl TemplateCatalog for MemegenClient {
    async fn fetch_templates(&self) -> Result<Vec<TemplateEntry>, FetchError> {
        self.fetch_catalog().await
    }
}

#[async_trait::async_trait]
impl MemeGenerator for MemegenClient {
    async fn generate(
        &self,
        template: &str,
        top: &str,
        bottom: &str,
    ) -> Result<String, GenerateError> {
        self.generate_meme(template, top, bottom).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;
    use serde_json::json;

    #[test]
    fn generation_url_is_exact_concatenation() {
        let url = build_generation_url(DEFAULT_ENDPOINT, "doge", "such test", "very pass");
        assert_eq!(
            url,
            "https://memegen.link/api/templates/doge/such test/very pass"
        );
    }

    #[test]
    fn generation_url_with_omitted_bottom_line() {
        let url = build_generation_url(DEFAULT_ENDPOINT, "doge", "wow", "");
        assert_eq!(url, "https://memegen.link/api/templates/doge/wow/");
    }

    #[test]
    fn generation_url_passes_special_characters_through() {
        // Path-segment characters are deliberately not encoded.
        let url = build_generation_url("https://b/", "t", "a/b", "c d");
        assert_eq!(url, "https://b/t/a/b/c d");
    }

    #[test]
    fn catalog_entry_name_strips_endpoint_prefix() {
        let catalog = json!({"Alpha": "https://memegen.link/api/templates/A"});
        let entries = parse_catalog(DEFAULT_ENDPOINT, &catalog).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Alpha");
        assert_eq!(entries[0].url, "https://memegen.link/api/templates/A");
        assert_eq!(entries[0].name, "A");
    }

    #[test]
    fn catalog_entry_with_foreign_prefix_keeps_full_url_as_name() {
        let catalog = json!({"Other": "https://elsewhere.test/B"});
        let entries = parse_catalog(DEFAULT_ENDPOINT, &catalog).unwrap();

        assert_eq!(entries[0].name, "https://elsewhere.test/B");
    }

    #[test]
    fn malformed_catalog_entries_are_skipped() {
        let catalog = json!({
            "Alpha": "https://memegen.link/api/templates/A",
            "Broken": 42,
        });
        let entries = parse_catalog(DEFAULT_ENDPOINT, &catalog).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "A");
    }

    #[test]
    fn non_object_catalog_is_a_decode_error() {
        let catalog = json!(["not", "a", "mapping"]);
        let err = parse_catalog(DEFAULT_ENDPOINT, &catalog).unwrap_err();

        assert!(matches!(err.kind, FetchErrorKind::Decode(_)));
    }

    #[test]
    fn generation_body_decodes_masked_url() {
        let body: GenerationBody =
            serde_json::from_str(r#"{"direct":{"masked":"https://img/x.png"}}"#).unwrap();
        assert_eq!(body.direct.masked, "https://img/x.png");
    }

    #[test]
    fn generation_body_without_masked_field_fails_to_decode() {
        let result = serde_json::from_str::<GenerationBody>(r#"{"direct":{}}"#);
        assert!(result.is_err());
    }
}
