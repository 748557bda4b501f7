//! # Host Bridge Traits
//!
//! Capability traits that must be implemented by each host environment.
//!
//! ## Overview
//!
//! This crate defines the contract between the admin core and host-specific
//! implementations. Each trait represents a capability the core requires but
//! cannot provide itself: transport and user interaction.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Single-shot async HTTP operations
//!   with JSON and multipart bodies
//! - [`Notifier`](notify::Notifier) - User-visible notifications and
//!   destructive-action confirmation prompts
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Implementations should convert platform-specific failures into the
//! matching variant and keep the message actionable.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so handles can be shared
//! across async tasks behind `Arc<dyn ...>`.

pub mod error;
pub mod http;
pub mod notify;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{
    HttpBody, HttpClient, HttpMethod, HttpRequest, HttpResponse, MultipartForm, MultipartPart,
};
pub use notify::{Notifier, Severity};
