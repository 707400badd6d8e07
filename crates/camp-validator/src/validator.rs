//! Validator core: configuration, compiled patterns and shared helpers

use crate::{ValidationConfig, ValidationError, ValidatorError};
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

/// North-American ten-digit number with optional area-code parentheses and delimiters
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?\d{3}\)?[-. ]?\d{3}[-.]?\d{4}$").expect("phone pattern is valid")
});

/// Whether a record is being inserted or an existing row rewritten
///
/// Some rules only apply to new records: a start date in the past and a
/// clashing camp slot are rejected on create but tolerated on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveContext {
    /// Record is not yet persisted
    Create,

    /// Record already exists in the store
    Update,
}

/// The Validator checks records before storage
#[derive(Debug, Clone)]
pub struct Validator {
    pub(crate) config: ValidationConfig,
    email_pattern: Regex,
}

impl Validator {
    /// Create a new Validator with the given configuration
    pub fn new(config: ValidationConfig) -> Result<Self, ValidatorError> {
        config.validate().map_err(ValidatorError::Config)?;
        let email_pattern = Regex::new(&email_pattern_source(&config.email_tlds))?;
        Ok(Self {
            config,
            email_pattern,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub(crate) fn email_matches(&self, email: &str) -> bool {
        self.email_pattern.is_match(email)
    }

    pub(crate) fn phone_matches(&self, digits: &str) -> bool {
        PHONE_PATTERN.is_match(digits)
    }
}

impl Default for Validator {
    fn default() -> Self {
        let config = ValidationConfig::default();
        let email_pattern = Regex::new(&email_pattern_source(&config.email_tlds))
            .expect("default email pattern is valid");
        Self {
            config,
            email_pattern,
        }
    }
}

/// `user@sub.domain.tld`, case-insensitive, TLD restricted to `tlds` when non-empty
///
/// Word characters and case folding are ASCII-only.
fn email_pattern_source(tlds: &[String]) -> String {
    let tld = if tlds.is_empty() {
        "[a-z]{2,}".to_string()
    } else {
        tlds.iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|")
    };
    format!(r"(?i)\A(?-u:\w)[^@\s,;]+@((?-u:[\w-])+\.)+(?-u:({}))\z", tld)
}

/// Convert a store failure into a validation error
pub(crate) fn lookup<T, E: Display>(result: Result<T, E>) -> Result<T, ValidationError> {
    result.map_err(|e| ValidationError::Lookup(e.to_string()))
}

/// Blank means missing, empty, or whitespace only
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_email_pattern() {
        let v = Validator::default();
        for ok in ["fred@fred.com", "fred@andrew.cmu.edu", "my_fred@fred.org", "fred123@fred.gov", "my.fred@fred.net"] {
            assert!(v.email_matches(ok), "{ok} should match");
        }
        for bad in [
            "fred",
            "fred@fred,com",
            "fred@fred.uk",
            "my fred@fred.com",
            "fred@fred.con",
            "f@fred.com",
            "éfred@fred.com",
            "fred@fréd.com",
        ] {
            assert!(!v.email_matches(bad), "{bad} should not match");
        }
    }

    #[test]
    fn test_email_pattern_ignores_case() {
        assert!(Validator::default().email_matches("Fred@Fred.COM"));
    }

    #[test]
    fn test_custom_tlds() {
        let config = ValidationConfig {
            email_tlds: vec!["io".to_string()],
            ..Default::default()
        };
        let v = Validator::new(config).unwrap();
        assert!(v.email_matches("fred@fred.io"));
        assert!(!v.email_matches("fred@fred.com"));
    }

    #[test]
    fn test_permissive_tlds() {
        let v = Validator::new(ValidationConfig::permissive()).unwrap();
        assert!(v.email_matches("fred@fred.uk"));
        assert!(!v.email_matches("fred@fred.c0m"));
        assert!(!v.email_matches("fred@fred.\u{212A}r"));
    }

    #[test]
    fn test_phone_pattern() {
        let v = Validator::default();
        assert!(v.phone_matches("4122683259"));
        assert!(v.phone_matches("(412) 268-3259"));
        assert!(v.phone_matches("412.268.3259"));
        assert!(!v.phone_matches("2683259"));
        assert!(!v.phone_matches("14122683259"));
        assert!(!v.phone_matches("412-2683-259"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ValidationConfig {
            min_rating: 0,
            ..Default::default()
        };
        assert!(matches!(Validator::new(config), Err(ValidatorError::Config(_))));
    }
}
