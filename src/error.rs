//! Common error types for the console client

use thiserror::Error;

/// Failure taxonomy for dashboard API calls.
///
/// The gateway never recovers from any of these; it logs the failure and
/// propagates it to the caller, which applies the per-category policy.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The transport itself failed: connection refused, DNS failure, or the
    /// configured request deadline elapsed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request completed but the HTTP status was outside the 2xx range.
    #[error("request failed: {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// The response body was not valid JSON.
    #[error("parse failure: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failure: {0}")]
    Serialize(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ApiError>;
