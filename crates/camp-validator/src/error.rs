//! Validator error types

use camp_domain::FieldErrors;
use thiserror::Error;

/// Errors raised while building a validator
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pattern compilation failed
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Outcome of a rejected validation
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more fields failed a rule
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// The store could not answer a lookup needed by a rule
    #[error("Lookup failed during validation: {0}")]
    Lookup(String),
}

impl ValidationError {
    /// Field errors, if this is a rule failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationError::Invalid(errors) => Some(errors),
            ValidationError::Lookup(_) => None,
        }
    }
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        ValidationError::Invalid(errors)
    }
}
