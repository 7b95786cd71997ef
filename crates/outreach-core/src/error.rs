//! Unified error types for Outreach Core.

use outreach_types::{ConfigError, PlanError};
use serde::Serialize;
use thiserror::Error;

/// Main error type for fallible Outreach operations.
///
/// Projection itself is infallible; these cover config I/O and strict
/// pre-submission checks.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Draft rejected by strict validation.
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Unclassified error with message.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Outreach operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Unknown(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Unknown(s.to_string())
    }
}
