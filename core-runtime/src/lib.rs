//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the media admin core:
//! - Configuration management
//! - Logging and tracing bootstrap
//! - Event bus for catalog mutations
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the domain crates depend on. It
//! establishes the logging conventions, the configuration entry point hosts
//! build a manager from, and the broadcast mechanism hosts use to observe
//! catalog changes without polling.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::{AdminConfig, AdminConfigBuilder};
pub use error::{Error, Result};
pub use events::{CatalogEvent, EventBus, MediaKind};
