//! Location module - venues camps are held at

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A venue with a seating capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Store-assigned id (`None` until persisted)
    pub id: Option<RecordId>,

    /// Venue name
    pub name: String,

    /// Maximum number of students the venue seats
    pub max_capacity: i64,

    /// Whether new camps may be scheduled here
    pub active: bool,
}

impl Location {
    /// Create a new, active, unsaved location
    pub fn new(name: impl Into<String>, max_capacity: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            max_capacity,
            active: true,
        }
    }

    /// Whether `students` seats fit in this venue
    pub fn fits(&self, students: i64) -> bool {
        students <= self.max_capacity
    }
}
