//! HTTP Client Implementation using Reqwest

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    http::{HttpBody, HttpClient, HttpMethod, HttpRequest, HttpResponse, MultipartForm, MultipartPart},
};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Reqwest-based HTTP client implementation
///
/// Provides HTTP operations with:
/// - Connection pooling via reqwest
/// - TLS support by default
/// - Multipart form assembly for media uploads
///
/// Requests are single-shot: a failed call is surfaced to the caller, never
/// retried by the transport.
pub struct ReqwestHttpClient {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestHttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .user_agent("wellness-media-core/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            default_timeout: timeout,
        }
    }

    /// Create a new HTTP client around a preconfigured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            default_timeout: Duration::from_secs(30),
        }
    }

    /// Convert bridge HttpMethod to reqwest Method
    fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Assemble a reqwest multipart form from bridge parts
    fn convert_multipart(form: MultipartForm) -> Result<reqwest::multipart::Form> {
        let mut out = reqwest::multipart::Form::new();
        for part in form.into_parts() {
            out = match part {
                MultipartPart::Text { name, value } => out.text(name, value),
                MultipartPart::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    let part = reqwest::multipart::Part::bytes(data.to_vec())
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| {
                            BridgeError::InvalidRequest(format!(
                                "Invalid content type '{}': {}",
                                content_type, e
                            ))
                        })?;
                    out.part(name, part)
                }
            };
        }
        Ok(out)
    }

    /// Build reqwest request from bridge request
    fn build_request(&self, request: HttpRequest) -> Result<reqwest::RequestBuilder> {
        let method = Self::convert_method(request.method);
        let mut req = self.client.request(method, &request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        match request.body {
            Some(HttpBody::Bytes { content_type, data }) => {
                req = req.header("Content-Type", content_type).body(data);
            }
            Some(HttpBody::Multipart(form)) => {
                req = req.multipart(Self::convert_multipart(form)?);
            }
            None => {}
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        Ok(req)
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        debug!(url = %url, method = ?request.method, "Executing HTTP request");

        let req = self.build_request(request)?;

        match req.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let headers: HashMap<String, String> = response
                    .headers()
                    .iter()
                    .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
                    .collect();

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| BridgeError::Network(format!("Failed to read body: {}", e)))?;

                debug!(url = %url, status = status, "HTTP request completed");
                Ok(HttpResponse {
                    status,
                    headers,
                    body,
                })
            }
            Err(e) => {
                warn!(url = %url, error = %e, "HTTP request failed");

                if e.is_timeout() {
                    Err(BridgeError::Timeout(timeout))
                } else if e.is_connect() {
                    Err(BridgeError::Network(format!("Connection failed: {}", e)))
                } else {
                    Err(BridgeError::Network(e.to_string()))
                }
            }
        }
    }
}
