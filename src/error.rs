//! NameMatch Error Types
//!
//! The matching functions are total; errors only come from configuration
//! loading and the command-line front end.

use thiserror::Error;

/// Central error type for NameMatch
#[derive(Error, Debug)]
pub enum NameMatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for NameMatch operations
pub type NameMatchResult<T> = Result<T, NameMatchError>;
