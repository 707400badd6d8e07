//! Time slot module - the two half-day scheduling buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-day bucket a camp runs in
///
/// Stored as `am` / `pm`. These two strings are the only accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    /// Morning session
    Am,

    /// Afternoon session
    Pm,
}

impl TimeSlot {
    /// Get the stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Am => "am",
            TimeSlot::Pm => "pm",
        }
    }

    /// Parse a stored time slot. Matching is exact: `AM` or `morning` are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "am" => Some(TimeSlot::Am),
            "pm" => Some(TimeSlot::Pm),
            _ => None,
        }
    }

    /// All accepted slots, morning first
    pub fn all() -> [TimeSlot; 2] {
        [TimeSlot::Am, TimeSlot::Pm]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
