//! Error types for the memebot workspace.
//!
//! This crate provides the foundation error types used throughout the memebot
//! crates.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use memebot_error::{MemebotResult, HttpError};
//!
//! fn build_client() -> MemebotResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match build_client() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod fetch;
mod generate;
mod http;
mod validation;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use error::{MemebotError, MemebotErrorKind, MemebotResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use generate::{GenerateError, GenerateErrorKind};
pub use http::HttpError;
pub use validation::ValidationError;
