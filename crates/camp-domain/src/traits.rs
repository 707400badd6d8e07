//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Curriculum, Location, RecordId};
use chrono::NaiveDate;

/// Read access to persisted records needed while validating a save
///
/// Implemented by the infrastructure layer (camp-store). Every `except`
/// argument names the record being saved so it never conflicts with itself.
pub trait RegistryLookup {
    /// Error type for lookup operations
    type Error;

    /// Get a curriculum by ID
    fn find_curriculum(&self, id: RecordId) -> Result<Option<Curriculum>, Self::Error>;

    /// Get a location by ID
    fn find_location(&self, id: RecordId) -> Result<Option<Location>, Self::Error>;

    /// Whether another curriculum already uses this name, ignoring case
    fn curriculum_name_taken(
        &self,
        name: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error>;

    /// Whether another instructor already uses this email, ignoring case
    fn instructor_email_taken(
        &self,
        email: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error>;

    /// Whether another camp already holds this (time slot, start date, location)
    fn camp_slot_taken(
        &self,
        time_slot: &str,
        start_date: NaiveDate,
        location_id: RecordId,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error>;
}
