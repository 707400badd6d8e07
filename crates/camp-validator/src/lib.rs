//! Camp Registry Validator
//!
//! Evaluates records against the registry's business rules before they are
//! persisted.
//!
//! The Validator provides:
//! - Presence and range checks on every record type
//! - Scheduling checks for camps (past start dates, date ordering, slot clashes)
//! - Referential checks (active curriculum and location, location capacity)
//! - Email and phone format checks for instructors
//!
//! Rules that need stored data read it through
//! [`camp_domain::traits::RegistryLookup`], so the same rules run against
//! SQLite in production and against a mock in tests.
//!
//! # Examples
//!
//! ```no_run
//! use camp_validator::{ValidationConfig, Validator};
//!
//! let config = ValidationConfig::default();
//! let validator = Validator::new(config).unwrap();
//!
//! // Validate a camp before storing
//! // validator.validate_camp(&camp, SaveContext::Create, today, &lookup)?;
//! ```

#![warn(missing_docs)]

mod camp;
mod config;
mod curriculum;
mod error;
mod instructor;
mod location;
pub mod messages;
mod validator;

pub use config::ValidationConfig;
pub use error::{ValidationError, ValidatorError};
pub use validator::{SaveContext, Validator};
