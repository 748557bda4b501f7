use bridge_traits::BridgeError;
use thiserror::Error;

/// Catalog operation errors
///
/// The four-way split mirrors how failures are presented: validation is
/// user-correctable before any network call, server messages are shown
/// verbatim, and transport/decode failures collapse into one generic
/// user-facing line while keeping their detail for the log.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field is missing or blank; detected before any request
    #[error("Required field missing: {field}")]
    Validation { field: String },

    /// The request could not be sent or completed
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status or `{error}` payload
    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode server response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// The message shown to the end user. Server-supplied text is passed
    /// through verbatim when present; transport and decode failures share a
    /// generic line (their detail goes to the developer log only).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field } => {
                format!("Please fill in the required field: {}.", field)
            }
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Server { .. } => "The server rejected the request.".to_string(),
            Self::Network(_) | Self::Decode(_) => {
                "Could not reach the server. Please try again.".to_string()
            }
        }
    }
}

impl From<BridgeError> for CatalogError {
    fn from(error: BridgeError) -> Self {
        // Timeouts and connection failures look the same to the user.
        Self::Network(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
