use std::io;
use thiserror::Error;

/// Custom error type for the hwlynx application
#[derive(Error, Debug)]
pub enum HwError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Sampling error: {0}")]
    Sampling(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the hwlynx application
pub type Result<T> = std::result::Result<T, HwError>;

impl HwError {
    /// Create a provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        HwError::Provider(msg.into())
    }

    /// Create a sampling error
    pub fn sampling<S: Into<String>>(msg: S) -> Self {
        HwError::Sampling(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HwError::Other(msg.into())
    }
}
