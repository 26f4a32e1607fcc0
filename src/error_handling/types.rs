//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a provider lookup produced no usable record.
///
/// These never leave an adapter: `lookup` logs them and returns `None`.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Timeout, connection failure, or an unreadable body.
    #[error("transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// Body was not JSON or did not match the provider schema.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response that explicitly signals failure.
    #[error("provider rejected lookup: {0}")]
    Rejected(String),

    /// Success status but no geolocation payload.
    #[error("response carried no geolocation payload")]
    MissingPayload,
}

impl ProviderError {
    /// Short category name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderError::Transport(e) if e.is_timeout() => "timeout",
            ProviderError::Transport(e) if e.is_connect() => "connection error",
            ProviderError::Transport(_) => "transport error",
            ProviderError::Decode(_) => "malformed response",
            ProviderError::Rejected(_) => "error status",
            ProviderError::MissingPayload => "missing payload",
        }
    }
}
