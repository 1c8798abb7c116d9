//! Template catalog fetch errors.

use derive_more::{Display, Error};

/// Specific catalog fetch failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum FetchErrorKind {
    /// Transport-level failure before a response arrived.
    #[display("Catalog request failed: {}", _0)]
    Transport(String),

    /// The catalog endpoint answered with a non-OK status.
    #[display("Catalog endpoint returned status {}", _0)]
    Status(u16),

    /// The catalog endpoint answered OK but with an empty body.
    #[display("Catalog endpoint returned an empty body")]
    EmptyBody,

    /// The catalog body could not be decoded as a title-to-url mapping.
    #[display("Failed to decode catalog body: {}", _0)]
    Decode(String),
}

/// Catalog fetch error with location tracking.
///
/// A fetch failure leaves the template cache untouched, so the next
/// invocation retries the catalog call.
#[derive(Debug, Clone, Display, Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The specific failure condition
    pub kind: FetchErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FetchError {
    /// Create a new FetchError from a kind at the current location.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
