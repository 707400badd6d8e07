//! Camp/instructor join records

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// Association row linking a camp to an instructor
///
/// Every row for a camp is destroyed when that camp is saved inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampInstructor {
    /// Store-assigned id (`None` until persisted)
    pub id: Option<RecordId>,

    /// Camp side of the association
    pub camp_id: RecordId,

    /// Instructor side of the association
    pub instructor_id: RecordId,
}

impl CampInstructor {
    /// Create an unsaved association
    pub fn new(camp_id: RecordId, instructor_id: RecordId) -> Self {
        Self {
            id: None,
            camp_id,
            instructor_id,
        }
    }
}
