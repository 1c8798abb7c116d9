//! In-memory template catalog cache.
//!
//! The cache avoids repeated catalog fetches for the common case of many
//! listing and template lookups within one process lifetime. It is populated
//! lazily on first use, never expires, and is never refreshed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;

pub use cache::TemplateCache;
