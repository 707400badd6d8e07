//! Camp module - a dated offering of a curriculum at a location

use crate::{RecordId, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled camp
///
/// Reference and schedule fields are optional on the record so that missing
/// input surfaces as a "can't be blank" field error rather than a type error.
/// `time_slot` keeps the raw submitted value; see [`Camp::slot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
    /// Store-assigned id (`None` until persisted)
    pub id: Option<RecordId>,

    /// Curriculum taught at this camp
    pub curriculum_id: Option<RecordId>,

    /// Venue hosting this camp
    pub location_id: Option<RecordId>,

    /// First day of the camp
    pub start_date: Option<NaiveDate>,

    /// Last day of the camp
    pub end_date: Option<NaiveDate>,

    /// Submitted time slot (`am` or `pm` once validated)
    pub time_slot: Option<String>,

    /// Price per student
    pub cost: f64,

    /// Enrollment cap, if any
    pub max_students: Option<i64>,

    /// Whether the camp is running
    pub active: bool,
}

impl Camp {
    /// Create a new, active, unsaved camp with no enrollment cap
    pub fn new(
        curriculum_id: RecordId,
        location_id: RecordId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        time_slot: TimeSlot,
        cost: f64,
    ) -> Self {
        Self {
            id: None,
            curriculum_id: Some(curriculum_id),
            location_id: Some(location_id),
            start_date: Some(start_date),
            end_date: Some(end_date),
            time_slot: Some(time_slot.as_str().to_string()),
            cost,
            max_students: None,
            active: true,
        }
    }

    /// Set the enrollment cap
    pub fn with_max_students(mut self, max_students: i64) -> Self {
        self.max_students = Some(max_students);
        self
    }

    /// Parsed time slot, `None` if missing or not an accepted value
    pub fn slot(&self) -> Option<TimeSlot> {
        self.time_slot.as_deref().and_then(TimeSlot::parse)
    }

    /// Starts today or later
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start_date.is_some_and(|d| d >= today)
    }

    /// Ended today or earlier
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|d| d <= today)
    }

    /// Key two camps may not share: (time slot, start date, location)
    pub fn slot_key(&self) -> Option<(&str, NaiveDate, RecordId)> {
        Some((self.time_slot.as_deref()?, self.start_date?, self.location_id?))
    }
}
