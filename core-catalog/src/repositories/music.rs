//! Music repository trait and HTTP implementation

use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest, MultipartForm};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{Music, MusicId};
use crate::repositories::{decode_json, endpoint, expect_success, Ack, Created, MediaUpload};

/// Fields for a new music track, validated before submission.
#[derive(Debug, Clone)]
pub struct NewMusic {
    pub name: String,
    pub author: String,
    pub category: String,
    pub media: MediaUpload,
}

/// Update payload for an existing track; the audio file itself is never
/// replaced through an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPatch {
    pub music_name: String,
    pub author: String,
    pub category: String,
}

/// Music repository interface
#[async_trait]
pub trait MusicRepository: Send + Sync {
    /// Fetch the full music list.
    async fn list(&self) -> Result<Vec<Music>>;

    /// Upload a new track (audio + metadata) as one multipart request.
    async fn create(&self, draft: NewMusic) -> Result<Created>;

    /// Update an existing track's metadata.
    async fn update(&self, id: &MusicId, patch: &MusicPatch) -> Result<Ack>;

    /// Delete a track and its stored audio.
    async fn remove(&self, id: &MusicId) -> Result<Ack>;
}

/// HTTP implementation of [`MusicRepository`]
pub struct HttpMusicRepository {
    http: Arc<dyn HttpClient>,
    base_url: String,
    request_timeout: Duration,
    upload_timeout: Duration,
}

impl HttpMusicRepository {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(30),
            upload_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeouts(mut self, request: Duration, upload: Duration) -> Self {
        self.request_timeout = request;
        self.upload_timeout = upload;
        self
    }
}

#[async_trait]
impl MusicRepository for HttpMusicRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Music>> {
        let request = HttpRequest::new(HttpMethod::Get, endpoint(&self.base_url, "music"))
            .timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        let tracks: Vec<Music> = decode_json(&response)?;

        info!(count = tracks.len(), "Fetched music list");
        Ok(tracks)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: NewMusic) -> Result<Created> {
        let form = MultipartForm::new()
            .file(
                "file",
                draft.media.file_name,
                draft.media.content_type,
                draft.media.data,
            )
            .text("musicName", draft.name)
            .text("author", draft.author)
            .text("category", draft.category);

        let request = HttpRequest::new(HttpMethod::Post, endpoint(&self.base_url, "upload-music"))
            .multipart(form)
            .timeout(self.upload_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        let created: Created = decode_json(&response)?;

        info!(id = ?created.id, "Uploaded music track");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    async fn update(&self, id: &MusicId, patch: &MusicPatch) -> Result<Ack> {
        let url = endpoint(&self.base_url, &format!("music/{}", id));
        let request = HttpRequest::new(HttpMethod::Put, url)
            .json(patch)?
            .timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        decode_json(&response)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn remove(&self, id: &MusicId) -> Result<Ack> {
        let url = endpoint(&self.base_url, &format!("music/{}", id));
        let request = HttpRequest::new(HttpMethod::Delete, url).timeout(self.request_timeout);

        let response = expect_success(self.http.execute(request).await?)?;
        decode_json(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::{HttpBody, HttpResponse, MultipartPart};
    use bytes::Bytes;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        Http {}

        #[async_trait]
        impl HttpClient for Http {
            async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
        }
    }

    fn ok(body: &str) -> BridgeResult<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        })
    }

    #[tokio::test]
    async fn test_list_decodes_renamed_fields() {
        let mut http = MockHttp::new();
        http.expect_execute().times(1).returning(|request| {
            assert!(request.url.ends_with("/music"));
            ok(r#"[{
                "_id": "770a",
                "music_name": "Calm Waters",
                "author": "A. Composer",
                "category": "Focus",
                "file_path": "uploads/770a.mp3"
            }]"#)
        });

        let repo = HttpMusicRepository::new(Arc::new(http), "http://localhost:5000");
        let list = repo.list().await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Calm Waters");
        assert_eq!(list[0].author, "A. Composer");
    }

    #[tokio::test]
    async fn test_create_builds_named_multipart_parts() {
        let mut http = MockHttp::new();
        http.expect_execute().times(1).returning(|request| {
            assert!(request.url.ends_with("/upload-music"));

            let Some(HttpBody::Multipart(form)) = &request.body else {
                panic!("expected multipart body");
            };

            let names: Vec<&str> = form
                .parts()
                .iter()
                .map(|part| match part {
                    MultipartPart::Text { name, .. } => name.as_str(),
                    MultipartPart::File { name, .. } => name.as_str(),
                })
                .collect();
            assert_eq!(names, vec!["file", "musicName", "author", "category"]);

            ok(r#"{"message": "Music uploaded successfully", "music_id": "770a"}"#)
        });

        let repo = HttpMusicRepository::new(Arc::new(http), "http://localhost:5000");
        let created = repo
            .create(NewMusic {
                name: "Calm".to_string(),
                author: "A".to_string(),
                category: "Focus".to_string(),
                media: MediaUpload::new("calm.mp3", "audio/mpeg", Bytes::from_static(b"abc")),
            })
            .await
            .unwrap();

        assert_eq!(created.id.as_deref(), Some("770a"));
    }

    #[tokio::test]
    async fn test_update_targets_entity_path() {
        let mut http = MockHttp::new();
        http.expect_execute().times(1).returning(|request| {
            assert!(request.url.ends_with("/music/770a"));
            assert_eq!(request.method, HttpMethod::Put);

            let Some(HttpBody::Bytes { data, .. }) = &request.body else {
                panic!("expected json body");
            };
            let value: serde_json::Value = serde_json::from_slice(data).unwrap();
            assert_eq!(value["musicName"], "Calmer Waters");

            ok(r#"{"message": "Music updated successfully"}"#)
        });

        let repo = HttpMusicRepository::new(Arc::new(http), "http://localhost:5000");
        let patch = MusicPatch {
            music_name: "Calmer Waters".to_string(),
            author: "A. Composer".to_string(),
            category: "Focus".to_string(),
        };

        let ack = repo.update(&MusicId::new("770a"), &patch).await.unwrap();
        assert_eq!(ack.message, "Music updated successfully");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network() {
        let mut http = MockHttp::new();
        http.expect_execute().times(1).returning(|_| {
            Err(bridge_traits::BridgeError::Network(
                "connection refused".to_string(),
            ))
        });

        let repo = HttpMusicRepository::new(Arc::new(http), "http://localhost:5000");
        let err = repo.list().await.unwrap_err();

        assert!(matches!(err, crate::CatalogError::Network(_)));
    }
}
