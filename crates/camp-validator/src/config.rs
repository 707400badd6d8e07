//! Validator configuration

use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Lowest non-zero rating a curriculum may name
    pub min_rating: i64,

    /// Highest rating a curriculum may name
    pub max_rating: i64,

    /// Accept 0 as a rating (an unrated beginner)
    pub allow_unrated: bool,

    /// Top-level domains accepted in instructor emails; empty accepts any
    /// alphabetic TLD of two or more letters
    pub email_tlds: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_rating: 100,
            max_rating: 3000,
            allow_unrated: true,
            email_tlds: ["com", "edu", "org", "net", "gov", "mil", "biz", "info"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (any email TLD)
    pub fn permissive() -> Self {
        Self {
            email_tlds: Vec::new(),
            ..Self::default()
        }
    }

    /// Create a strict configuration (every curriculum must name a real rating)
    pub fn strict() -> Self {
        Self {
            allow_unrated: false,
            ..Self::default()
        }
    }

    /// Whether a rating is in {0} ∪ [min_rating, max_rating]
    pub fn rating_allowed(&self, rating: i64) -> bool {
        (self.allow_unrated && rating == 0)
            || (self.min_rating..=self.max_rating).contains(&rating)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_rating <= 0 {
            return Err("min_rating must be greater than 0".to_string());
        }
        if self.max_rating <= self.min_rating {
            return Err("max_rating must be greater than min_rating".to_string());
        }
        if let Some(bad) = self
            .email_tlds
            .iter()
            .find(|tld| tld.is_empty() || !tld.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(format!("email TLD '{}' is not a bare domain label", bad));
        }
        Ok(())
    }
}
