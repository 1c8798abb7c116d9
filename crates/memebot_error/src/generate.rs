//! Meme generation errors.

use derive_more::{Display, Error};

/// Specific meme generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum GenerateErrorKind {
    /// Transport-level failure before a response arrived.
    #[display("Generation request failed: {}", _0)]
    Transport(String),

    /// The upstream answered with a non-OK status, e.g. an unknown template.
    #[display("Generation endpoint returned status {}", _0)]
    Status(u16),

    /// The upstream answered OK but with an empty body.
    #[display("Generation endpoint returned an empty body")]
    EmptyBody,

    /// The generation body lacked the expected `direct.masked` field.
    #[display("Failed to decode generation body: {}", _0)]
    Decode(String),
}

/// Meme generation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Generate Error: {} at line {} in {}", kind, line, file)]
pub struct GenerateError {
    /// The specific failure condition
    pub kind: GenerateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GenerateError {
    /// Create a new GenerateError from a kind at the current location.
    #[track_caller]
    pub fn new(kind: GenerateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
