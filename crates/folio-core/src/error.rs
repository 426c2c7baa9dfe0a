//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// A timing or site configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `start` was called on a typing timer whose previous run was not cancelled
    #[error("Typing timer is already running; cancel it before starting again")]
    AlreadyRunning,

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The GitHub API answered with a non-success status
    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The GitHub API rate limit is exhausted
    #[error("GitHub rate limit exceeded (resets at {})", .reset_at.map(|t| t.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    RateLimited { reset_at: Option<i64> },

    /// The requested user or repository does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
