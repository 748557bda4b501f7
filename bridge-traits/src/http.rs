//! HTTP Client Abstraction
//!
//! Provides single-shot async HTTP operations with JSON and multipart bodies.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{BridgeError, Result};

/// HTTP method types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One part of a multipart form submission.
#[derive(Debug, Clone)]
pub enum MultipartPart {
    /// Plain text field
    Text { name: String, value: String },
    /// File attachment with a filename and content type
    File {
        name: String,
        file_name: String,
        content_type: String,
        data: Bytes,
    },
}

/// A `multipart/form-data` body, assembled part by part.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file attachment.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<MultipartPart> {
        self.parts
    }
}

/// Request body payload.
#[derive(Debug, Clone)]
pub enum HttpBody {
    /// Raw bytes with an explicit content type
    Bytes { content_type: String, data: Bytes },
    /// Multipart form; the transport assigns the boundary
    Multipart(MultipartForm),
}

/// HTTP request builder
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<HttpBody>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach a JSON body, setting the content type.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body).map_err(|e| {
            BridgeError::InvalidRequest(format!("JSON serialization failed: {}", e))
        })?;
        self.body = Some(HttpBody::Bytes {
            content_type: "application/json".to_string(),
            data: Bytes::from(json),
        });
        Ok(self)
    }

    /// Attach a multipart form body.
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(HttpBody::Multipart(form));
        self
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Parse response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            BridgeError::InvalidRequest(format!("JSON deserialization failed: {}", e))
        })
    }

    /// Get response body as UTF-8 string
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| BridgeError::InvalidRequest(format!("Invalid UTF-8: {}", e)))
    }

    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client trait
///
/// Every call issues exactly one request: no automatic retry, no backoff.
/// Failed operations are reported to the user by the caller, who decides
/// whether to resubmit.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::http::{HttpClient, HttpRequest, HttpMethod};
///
/// async fn fetch_catalog(client: &dyn HttpClient) -> Result<String> {
///     let request = HttpRequest::new(HttpMethod::Get, "http://localhost:5000/music");
///     let response = client.execute(request).await?;
///     response.text()
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute a single HTTP request
    ///
    /// # Errors
    ///
    /// Returns error if the connection fails, TLS validation fails, or the
    /// request times out. A response with a non-success status is NOT an
    /// error at this layer; callers inspect [`HttpResponse::status`].
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let request = HttpRequest::new(HttpMethod::Get, "http://localhost:5000/exercises")
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(30));

        assert_eq!(request.url, "http://localhost:5000/exercises");
        assert_eq!(
            request.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::new(HttpMethod::Put, "http://localhost:5000/music/1")
            .json(&serde_json::json!({ "musicName": "Calm" }))
            .unwrap();

        match request.body {
            Some(HttpBody::Bytes { content_type, data }) => {
                assert_eq!(content_type, "application/json");
                assert!(!data.is_empty());
            }
            other => panic!("expected bytes body, got {:?}", other),
        }
    }

    #[test]
    fn test_multipart_form_accumulates_parts() {
        let form = MultipartForm::new()
            .file("file", "calm.mp3", "audio/mpeg", Bytes::from_static(b"abc"))
            .text("musicName", "Calm")
            .text("author", "A");

        assert_eq!(form.parts().len(), 3);
        match &form.parts()[0] {
            MultipartPart::File {
                name, file_name, ..
            } => {
                assert_eq!(name, "file");
                assert_eq!(file_name, "calm.mp3");
            }
            other => panic!("expected file part, got {:?}", other),
        }
    }

    #[test]
    fn test_http_response_status_checks() {
        let ok = HttpResponse {
            status: 201,
            headers: HashMap::new(),
            body: Bytes::from_static(b"{}"),
        };
        let err = HttpResponse {
            status: 500,
            headers: HashMap::new(),
            body: Bytes::new(),
        };

        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
