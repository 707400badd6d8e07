//! Curriculum module - reusable course definitions

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A course template such as "Chess Tactics"
///
/// Ratings are optional on the record so that a missing value can be reported
/// as a field error instead of failing to construct the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Store-assigned id (`None` until persisted)
    pub id: Option<RecordId>,

    /// Display name, unique ignoring case
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Lowest rating the course targets
    pub min_rating: Option<i64>,

    /// Highest rating the course targets
    pub max_rating: Option<i64>,

    /// Whether new camps may reference this curriculum
    pub active: bool,
}

impl Curriculum {
    /// Create a new, active, unsaved curriculum
    pub fn new(name: impl Into<String>, min_rating: i64, max_rating: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            min_rating: Some(min_rating),
            max_rating: Some(max_rating),
            active: true,
        }
    }

    /// Whether a player with `rating` falls inside `[min_rating, max_rating]`
    pub fn covers_rating(&self, rating: i64) -> bool {
        match (self.min_rating, self.max_rating) {
            (Some(min), Some(max)) => min <= rating && rating <= max,
            _ => false,
        }
    }
}
