//! Camp Registry Domain Layer
//!
//! This crate contains the record types and value objects for the camp
//! registry. It carries no storage or validation machinery; those live in
//! `camp-store` and `camp-validator` and depend on the types defined here.
//!
//! ## Key Concepts
//!
//! - **Curriculum**: a reusable course definition with a skill-rating range
//! - **Location**: a venue with an active flag and a seating capacity
//! - **Camp**: a dated offering of a curriculum at a location in one time slot
//! - **Instructor**: staff member assignable to camps
//! - **CampInstructor**: the join record between a camp and an instructor
//! - **FieldErrors**: field-keyed validation messages returned on rejection
//!
//! ## Architecture
//!
//! - Pure data and derived values only
//! - Query descriptors are plain structs; the store compiles them to SQL
//! - The `RegistryLookup` trait is the seam validation uses to read the store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assignment;
pub mod camp;
pub mod curriculum;
pub mod errors;
pub mod instructor;
pub mod location;
pub mod query;
pub mod time_slot;
pub mod traits;

// Re-exports for convenience
pub use assignment::CampInstructor;
pub use camp::Camp;
pub use curriculum::Curriculum;
pub use errors::FieldErrors;
pub use instructor::{normalize_phone, Instructor};
pub use location::Location;
pub use query::{CampOrder, CampQuery, CurriculumQuery, InstructorQuery};
pub use time_slot::TimeSlot;

/// Row identifier assigned by the store
pub type RecordId = i64;
