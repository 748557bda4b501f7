//! Exercise repository trait and HTTP implementation

use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, MultipartForm};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{Difficulty, Exercise, ExerciseId};
use crate::repositories::{decode_json, endpoint, expect_success, Ack, Created, MediaUpload};

/// Fields for a new exercise, validated before submission.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub category: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub instructions: Vec<String>,
    pub media: MediaUpload,
}

/// Update payload for an existing exercise. Media is never replaced through
/// an update; re-uploading is a delete + create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    pub exercise_name: String,
    pub category: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub instructions: Vec<String>,
}

/// Exercise repository interface
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Fetch the full exercise list.
    ///
    /// # Errors
    /// `Network` on transport failure, `Decode` on a malformed body. Callers
    /// leave their current list untouched on failure.
    async fn list(&self) -> Result<Vec<Exercise>>;

    /// Upload a new exercise (media + metadata) as one multipart request.
    async fn create(&self, draft: NewExercise) -> Result<Created>;

    /// Update an existing exercise's metadata.
    async fn update(&self, id: &ExerciseId, patch: &ExercisePatch) -> Result<Ack>;

    /// Delete an exercise and its stored media.
    async fn remove(&self, id: &ExerciseId) -> Result<Ack>;
}

/// HTTP implementation of [`ExerciseRepository`]
pub struct HttpExerciseRepository {
    http: Arc<dyn HttpClient>,
    base_url: String,
    request_timeout: Duration,
    upload_timeout: Duration,
}

impl HttpExerciseRepository {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(30),
            upload_timeout: Duration::from_secs(120),
        }
    }

    /// Override the per-request timeouts. Uploads carry whole video files
    /// and get the longer budget.
    pub fn with_timeouts(mut self, request: Duration, upload: Duration) -> Self {
        self.request_timeout = request;
        self.upload_timeout = upload;
        self
    }
}

#[async_trait]
impl ExerciseRepository for HttpExerciseRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Exercise>> {
        let request = HttpRequest::new(HttpMethod::Get, endpoint(&self.base_url, "exercises"))
            .timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        let exercises: Vec<Exercise> = decode_json(&response)?;

        info!(count = exercises.len(), "Fetched exercise list");
        Ok(exercises)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: NewExercise) -> Result<Created> {
        let form = MultipartForm::new()
            .file(
                "video",
                draft.media.file_name,
                draft.media.content_type,
                draft.media.data,
            )
            .text("exerciseName", draft.name)
            .text("category", draft.category)
            .text("duration", draft.duration)
            .text("difficulty", draft.difficulty.as_str().to_string())
            .text("description", draft.description)
            .text("instructions", draft.instructions.join("\n"));

        let request = HttpRequest::new(
            HttpMethod::Post,
            endpoint(&self.base_url, "upload-exercise"),
        )
        .multipart(form)
        .timeout(self.upload_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        let created: Created = decode_json(&response)?;

        info!(id = ?created.id, "Uploaded exercise");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn update(&self, id: &ExerciseId, patch: &ExercisePatch) -> Result<Ack> {
        let url = endpoint(&self.base_url, &format!("exercises/{}", id));
        let request = HttpRequest::new(HttpMethod::Put, url)
            .json(patch)?
            .timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        decode_json(&response)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn remove(&self, id: &ExerciseId) -> Result<Ack> {
        let url = endpoint(&self.base_url, &format!("exercises/{}", id));
        let request = HttpRequest::new(HttpMethod::Delete, url).timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        decode_json(&response)
    }
}
