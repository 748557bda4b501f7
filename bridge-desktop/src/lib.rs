//! # Desktop Bridge Implementations
//!
//! Desktop-ready adapters for the [`bridge_traits`] capabilities:
//!
//! - [`ReqwestHttpClient`] - HTTP transport backed by `reqwest` with
//!   connection pooling, rustls TLS, and multipart upload support
//! - [`ConsoleNotifier`] - alerts on stderr and confirmation prompts on
//!   stdin, with a non-interactive `assume_yes` mode
//!
//! These are injected automatically by `core-runtime` when its
//! `desktop-shims` feature is enabled.

mod http;
mod notify;

pub use http::ReqwestHttpClient;
pub use notify::ConsoleNotifier;
