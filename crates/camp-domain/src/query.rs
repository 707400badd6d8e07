//! Query descriptors for the registry
//!
//! Each descriptor is a set of optional filters plus an ordering. The store
//! compiles them to SQL; `matches` evaluates the same filters in memory.

use crate::{Camp, Curriculum, Instructor, RecordId, TimeSlot};
use chrono::NaiveDate;

/// Criteria for listing curricula
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumQuery {
    /// Filter by the active flag
    pub active: Option<bool>,

    /// Only curricula whose rating range contains this rating
    pub rating: Option<i64>,

    /// Order by name instead of id
    pub alphabetical: bool,
}

impl CurriculumQuery {
    /// Active curricula
    pub fn active() -> Self {
        Self {
            active: Some(true),
            ..Default::default()
        }
    }

    /// Inactive curricula
    pub fn inactive() -> Self {
        Self {
            active: Some(false),
            ..Default::default()
        }
    }

    /// Curricula suited to a player rated `rating`
    pub fn for_rating(rating: i64) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }

    /// Order results by name
    pub fn alphabetical(mut self) -> Self {
        self.alphabetical = true;
        self
    }

    /// Whether a curriculum passes the filters
    pub fn matches(&self, curriculum: &Curriculum) -> bool {
        self.active.map_or(true, |a| curriculum.active == a)
            && self.rating.map_or(true, |r| curriculum.covers_rating(r))
    }
}

/// Orderings available for camps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampOrder {
    /// By curriculum name, ties broken by curriculum id
    Alphabetical,

    /// By start date, then end date
    Chronological,
}

/// Criteria for listing camps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampQuery {
    /// Filter by the active flag
    pub active: Option<bool>,

    /// Filter by time slot
    pub time_slot: Option<TimeSlot>,

    /// Filter by curriculum
    pub curriculum_id: Option<RecordId>,

    /// Only camps starting on or after this date
    pub starts_on_or_after: Option<NaiveDate>,

    /// Only camps ending on or before this date
    pub ends_on_or_before: Option<NaiveDate>,

    /// Result ordering; store id order when `None`
    pub order: Option<CampOrder>,
}

impl CampQuery {
    /// Active camps
    pub fn active() -> Self {
        Self {
            active: Some(true),
            ..Default::default()
        }
    }

    /// Inactive camps
    pub fn inactive() -> Self {
        Self {
            active: Some(false),
            ..Default::default()
        }
    }

    /// Camps in the `am` slot
    pub fn morning() -> Self {
        Self {
            time_slot: Some(TimeSlot::Am),
            ..Default::default()
        }
    }

    /// Camps in the `pm` slot
    pub fn afternoon() -> Self {
        Self {
            time_slot: Some(TimeSlot::Pm),
            ..Default::default()
        }
    }

    /// Camps starting today or later
    pub fn upcoming(today: NaiveDate) -> Self {
        Self {
            starts_on_or_after: Some(today),
            ..Default::default()
        }
    }

    /// Camps that ended today or earlier
    pub fn past(today: NaiveDate) -> Self {
        Self {
            ends_on_or_before: Some(today),
            ..Default::default()
        }
    }

    /// Camps teaching one curriculum
    pub fn for_curriculum(curriculum_id: RecordId) -> Self {
        Self {
            curriculum_id: Some(curriculum_id),
            ..Default::default()
        }
    }

    /// Order by curriculum name
    pub fn alphabetical(mut self) -> Self {
        self.order = Some(CampOrder::Alphabetical);
        self
    }

    /// Order by start date, then end date
    pub fn chronological(mut self) -> Self {
        self.order = Some(CampOrder::Chronological);
        self
    }

    /// Whether a camp passes the filters (ordering is ignored)
    pub fn matches(&self, camp: &Camp) -> bool {
        self.active.map_or(true, |a| camp.active == a)
            && self.time_slot.map_or(true, |s| camp.slot() == Some(s))
            && self
                .curriculum_id
                .map_or(true, |id| camp.curriculum_id == Some(id))
            && self
                .starts_on_or_after
                .map_or(true, |d| camp.is_upcoming(d))
            && self.ends_on_or_before.map_or(true, |d| camp.is_past(d))
    }
}

/// Criteria for listing instructors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorQuery {
    /// Filter by the active flag
    pub active: Option<bool>,

    /// Only instructors without a bio
    pub needs_bio: bool,

    /// Order by last name, then first name
    pub alphabetical: bool,
}

impl InstructorQuery {
    /// Active instructors
    pub fn active() -> Self {
        Self {
            active: Some(true),
            ..Default::default()
        }
    }

    /// Inactive instructors
    pub fn inactive() -> Self {
        Self {
            active: Some(false),
            ..Default::default()
        }
    }

    /// Instructors with no bio on file
    pub fn needs_bio() -> Self {
        Self {
            needs_bio: true,
            ..Default::default()
        }
    }

    /// Order by last name, then first name
    pub fn alphabetical(mut self) -> Self {
        self.alphabetical = true;
        self
    }

    /// Whether an instructor passes the filters
    pub fn matches(&self, instructor: &Instructor) -> bool {
        self.active.map_or(true, |a| instructor.active == a)
            && (!self.needs_bio || instructor.bio.is_none())
    }
}
