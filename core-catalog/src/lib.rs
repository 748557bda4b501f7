//! # Media Catalog Module
//!
//! Owns the domain model for uploaded wellness media and provides repository
//! clients for the backend REST API.
//!
//! ## Overview
//!
//! This module manages:
//! - Entity types for the two media kinds (guided exercises, relaxation music)
//! - HTTP repository clients with list/create/update/delete operations
//! - Pure derivations over a loaded list: category index and filter view
//! - Playable URL resolution for stored media references

pub mod error;
pub mod filter;
pub mod media;
pub mod models;
pub mod repositories;

pub use error::{CatalogError, Result};
pub use filter::{categories, visible, ALL_CATEGORIES};
pub use media::MediaServer;
pub use models::{Categorized, Difficulty, Exercise, ExerciseId, Music, MusicId};
