//! Core data types and collaborator traits for memebot.
//!
//! This crate defines the types that cross crate boundaries:
//!
//! - [`TemplateEntry`] - one meme template known to the upstream catalog
//! - [`CommandInvocation`] - the per-invocation context a host hands to a command
//! - [`Attachment`] / [`OutgoingMessage`] - outbound message payloads
//!
//! and the trait seams the command layer is written against:
//!
//! - [`TemplateCatalog`] - fetches the template catalog
//! - [`MemeGenerator`] - renders a meme image from a template and two text lines
//! - [`Notifier`] - host-provided outbound message delivery

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod invocation;
mod message;
mod template;
mod traits;

pub use invocation::CommandInvocation;
pub use message::{Attachment, OutgoingMessage};
pub use template::TemplateEntry;
pub use traits::{MemeGenerator, Notifier, TemplateCatalog};
