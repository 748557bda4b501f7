//! # Admin Configuration Module
//!
//! Provides configuration management for the media admin core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct an
//! [`AdminConfig`] holding the backend location, request budgets, and the
//! bridge implementations the core needs. It enforces fail-fast validation so
//! a misconfigured host learns at startup, not on the first request.
//!
//! ## Required Settings
//!
//! - `api_base_url` - Backend base URL (http or https)
//!
//! ## Optional Dependencies (with desktop defaults)
//!
//! - `HttpClient` - HTTP transport (desktop default: reqwest)
//! - `Notifier` - User notifications (desktop default: console)
//!
//! When the `desktop-shims` feature is enabled, desktop-ready defaults are
//! injected automatically if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::AdminConfig;
//!
//! let config = AdminConfig::builder()
//!     .api_base_url("http://localhost:5000")
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::{HttpClient, Notifier};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the media admin core.
///
/// Use [`AdminConfigBuilder`] to construct instances; `build()` resolves the
/// bridge defaults, so a built config always carries usable handles.
#[derive(Clone)]
pub struct AdminConfig {
    /// Backend base URL, normalized without a trailing slash
    pub api_base_url: String,

    /// Timeout for list/update/delete requests
    pub request_timeout: Duration,

    /// Timeout for media uploads; these carry whole files and get a longer
    /// budget
    pub upload_timeout: Duration,

    /// HTTP transport
    pub http_client: Arc<dyn HttpClient>,

    /// User notification sink
    pub notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("upload_timeout", &self.upload_timeout)
            .field("http_client", &"HttpClient { ... }")
            .field("notifier", &"Notifier { ... }")
            .finish()
    }
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::default()
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client(timeout: Duration) -> Result<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    Ok(Arc::new(ReqwestHttpClient::with_timeout(timeout)))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client(_timeout: Duration) -> Result<Arc<dyn HttpClient>> {
    Err(Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "HttpClient implementation is required for backend access. \
                 Desktop: enable the 'desktop-shims' feature to use the default ReqwestHttpClient. \
                 Other hosts: inject a platform-native HTTP adapter."
            .to_string(),
    })
}

#[cfg(feature = "desktop-shims")]
fn provide_default_notifier() -> Result<Arc<dyn Notifier>> {
    use bridge_desktop::ConsoleNotifier;

    Ok(Arc::new(ConsoleNotifier::new()))
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_notifier() -> Result<Arc<dyn Notifier>> {
    Err(Error::CapabilityMissing {
        capability: "Notifier".to_string(),
        message: "Notifier implementation is required for user-facing messages. \
                 Desktop: enable the 'desktop-shims' feature to use the default ConsoleNotifier. \
                 GUI shells: inject a toast/dialog adapter."
            .to_string(),
    })
}

/// Builder for constructing [`AdminConfig`] instances.
#[derive(Default)]
pub struct AdminConfigBuilder {
    api_base_url: Option<String>,
    request_timeout: Option<Duration>,
    upload_timeout: Option<Duration>,
    http_client: Option<Arc<dyn HttpClient>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AdminConfigBuilder {
    /// Sets the backend base URL (required). A trailing slash is trimmed.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Sets the timeout for list/update/delete requests.
    ///
    /// Default: 30 seconds
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the timeout for media uploads.
    ///
    /// Default: 120 seconds
    pub fn upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = Some(timeout);
        self
    }

    /// Sets the HTTP client implementation.
    ///
    /// If not provided, the desktop default (reqwest-based) is used when the
    /// `desktop-shims` feature is enabled.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the notifier implementation.
    ///
    /// If not provided, the desktop default (console-based) is used when the
    /// `desktop-shims` feature is enabled.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Builds the final `AdminConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error with an actionable message when the base URL is
    /// missing or malformed, a timeout is zero, or a required bridge has no
    /// default for the enabled features.
    pub fn build(self) -> Result<AdminConfig> {
        let api_base_url = self.api_base_url.ok_or_else(|| {
            Error::Config("API base URL is required. Use .api_base_url() to set it.".to_string())
        })?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                api_base_url
            )));
        }

        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let request_timeout = self.request_timeout.unwrap_or(Duration::from_secs(30));
        let upload_timeout = self.upload_timeout.unwrap_or(Duration::from_secs(120));

        if request_timeout.is_zero() || upload_timeout.is_zero() {
            return Err(Error::Config(
                "Timeouts must be greater than zero".to_string(),
            ));
        }

        if upload_timeout < request_timeout {
            return Err(Error::Config(
                "Upload timeout must not be shorter than the request timeout".to_string(),
            ));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => provide_default_http_client(request_timeout)?,
        };

        let notifier = match self.notifier {
            Some(notifier) => notifier,
            None => provide_default_notifier()?,
        };

        Ok(AdminConfig {
            api_base_url,
            request_timeout,
            upload_timeout,
            http_client,
            notifier,
        })
    }
}
