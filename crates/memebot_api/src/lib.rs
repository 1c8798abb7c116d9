//! memegen.link API client.
//!
//! Two upstream calls live here: the catalog fetch (a JSON object mapping
//! template title to template URL) and meme generation (a JSON body whose
//! `direct.masked` field carries the rendered image URL). The client
//! implements the [`memebot_core::TemplateCatalog`] and
//! [`memebot_core::MemeGenerator`] traits the command layer is written
//! against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;

pub use client::MemegenClient;
pub use config::MemegenConfig;
