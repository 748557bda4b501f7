//! # Repository Clients
//!
//! Async clients for the backend's REST surface, one per media kind.
//!
//! ## Architecture
//!
//! - Traits define the interface for each media kind
//! - HTTP implementations run over the [`HttpClient`] bridge
//! - All operations are single-shot and return `Result<T>`; no retries
//!
//! ## Available Repositories
//!
//! - `ExerciseRepository` - Guided exercises with demonstration videos
//! - `MusicRepository` - Relaxation music tracks

pub mod exercise;
pub mod music;

pub use exercise::{ExercisePatch, ExerciseRepository, HttpExerciseRepository, NewExercise};
pub use music::{HttpMusicRepository, MusicPatch, MusicRepository, NewMusic};

use bridge_traits::http::HttpResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// A media attachment staged for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl MediaUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// Decoded `{message}` receipt from a mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Decoded create receipt. The backend names the id field per kind
/// (`exercise_id`, `music_id`); the authoritative id always comes from the
/// post-mutation reload, so an absent id is not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    #[serde(default, alias = "exercise_id", alias = "music_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub message: String,
}

/// `{error}` / `{message}` envelope used by failure responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

/// Join a base URL and a path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Map a non-success response to [`CatalogError::Server`], pulling the
/// server-supplied message out of the `{error}` envelope when present.
pub(crate) fn expect_success(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let message = serde_json::from_slice::<ErrorEnvelope>(&response.body)
        .ok()
        .map(|envelope| {
            if envelope.error.is_empty() {
                envelope.message
            } else {
                envelope.error
            }
        })
        .unwrap_or_default();

    Err(CatalogError::Server {
        status: response.status,
        message,
    })
}

/// Decode a response body, mapping parse failures to [`CatalogError::Decode`].
pub(crate) fn decode_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    serde_json::from_slice(&response.body)
        .map_err(|e| CatalogError::Decode(format!("unexpected response body: {}", e)))
}
