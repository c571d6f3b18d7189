//! Error types for the Spark client.
//!
//! Validation, transport, API and configuration failures are unified into
//! a single `SparkError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using SparkError.
pub type SparkResult<T> = Result<T, SparkError>;

/// Unified error type for every Spark client operation.
#[derive(Error, Debug)]
pub enum SparkError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// No access token was configured or found in the environment.
    #[error("missing access token")]
    MissingAccessToken,

    // -- Validation errors --
    /// Request parameters failed local validation. No request was sent.
    #[error("{0}")]
    InvalidParams(String),

    // -- Network errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The server rejected the access token (401/403).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The addressed entity does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Server returned any other non-success response.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the status reason.
        message: String,
        /// Value of the `TrackingID` response header, if any.
        tracking_id: Option<String>,
    },

    // -- Data errors --
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SparkError {
    /// Whether this error was raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidParams(_) | Self::MissingAccessToken)
    }

    /// HTTP status associated with this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SparkError {
    fn from(e: serde_json::Error) -> Self {
        SparkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SparkError {
    fn from(e: toml::de::Error) -> Self {
        SparkError::Config(e.to_string())
    }
}
