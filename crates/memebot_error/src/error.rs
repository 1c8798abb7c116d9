//! Top-level error wrapper types.

use crate::{CommandError, ConfigError, FetchError, GenerateError, HttpError, ValidationError};

/// This is the foundation error enum. Each memebot crate surfaces its
/// failures through one of these variants.
///
/// # Examples
///
/// ```
/// use memebot_error::{MemebotError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MemebotError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MemebotErrorKind {
    /// HTTP client error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Invocation argument validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Template catalog fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Meme generation error
    #[from(GenerateError)]
    Generate(GenerateError),
    /// Command dispatch error
    #[from(CommandError)]
    Command(CommandError),
}

/// Memebot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use memebot_error::{MemebotResult, ConfigError};
///
/// fn might_fail() -> MemebotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Memebot Error: {}", _0)]
pub struct MemebotError(Box<MemebotErrorKind>);

impl MemebotError {
    /// Create a new error from a kind.
    pub fn new(kind: MemebotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MemebotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MemebotErrorKind
impl<T> From<T> for MemebotError
where
    T: Into<MemebotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for memebot operations.
///
/// # Examples
///
/// ```
/// use memebot_error::{MemebotResult, HttpError};
///
/// fn build_client() -> MemebotResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type MemebotResult<T> = std::result::Result<T, MemebotError>;
