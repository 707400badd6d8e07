//! Error types for the CLI application.

use camp_domain::FieldErrors;
use camp_store::StoreError;
use camp_validator::ValidatorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation rules could not be built from the configuration
    #[error("Validator error: {0}")]
    Validator(#[from] ValidatorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Requested record does not exist
    #[error("{0} not found")]
    NotFound(String),
}

impl CliError {
    /// Field errors, if a save was rejected by validation
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CliError::Store(e) => e.field_errors(),
            _ => None,
        }
    }
}
