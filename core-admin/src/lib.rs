//! # Media Admin Module
//!
//! The entity-list-manager pattern behind the admin screens: one generic
//! orchestrator instantiated per media kind.
//!
//! ## Overview
//!
//! - [`session::EditSession`] - explicit single-slot edit state machine
//! - [`forms`] - create-form state with client-side validation
//! - [`catalog::Catalog`] - glue trait binding one media kind's types to the
//!   generic manager
//! - [`manager::ListManager`] - owns the loaded list, filter, form, and edit
//!   session; sequences repository calls with reloads
//!
//! ## Bootstrap
//!
//! ```ignore
//! use core_admin::exercise_manager;
//! use core_runtime::AdminConfig;
//!
//! let config = AdminConfig::builder()
//!     .api_base_url("http://localhost:5000")
//!     .build()?;
//!
//! let mut manager = exercise_manager(&config);
//! manager.refresh().await;
//! ```

pub mod catalog;
pub mod forms;
pub mod manager;
pub mod session;

pub use catalog::{Catalog, ExerciseCatalog, MusicCatalog};
pub use forms::{CreateForm, ExerciseForm, ExerciseStaged, MusicForm, MusicStaged};
pub use manager::ListManager;
pub use session::EditSession;

use core_catalog::repositories::{HttpExerciseRepository, HttpMusicRepository};
use core_runtime::AdminConfig;
use std::sync::Arc;

/// Manager over the exercise catalog.
pub type ExerciseManager = ListManager<ExerciseCatalog>;

/// Manager over the music catalog.
pub type MusicManager = ListManager<MusicCatalog>;

/// Wire an exercise manager from a built config.
pub fn exercise_manager(config: &AdminConfig) -> ExerciseManager {
    let repo = HttpExerciseRepository::new(config.http_client.clone(), config.api_base_url.clone())
        .with_timeouts(config.request_timeout, config.upload_timeout);

    ListManager::new(ExerciseCatalog::new(Arc::new(repo)), config.notifier.clone())
}

/// Wire a music manager from a built config.
pub fn music_manager(config: &AdminConfig) -> MusicManager {
    let repo = HttpMusicRepository::new(config.http_client.clone(), config.api_base_url.clone())
        .with_timeouts(config.request_timeout, config.upload_timeout);

    ListManager::new(MusicCatalog::new(Arc::new(repo)), config.notifier.clone())
}
