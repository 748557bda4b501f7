use thiserror::Error;

/// Transport-level failures surfaced by bridge implementations.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
