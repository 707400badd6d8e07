//! Camp Registry Storage Layer
//!
//! Persists curricula, locations, camps, instructors and camp assignments in
//! SQLite.
//!
//! # Architecture
//!
//! - Every save runs validate-then-write inside one SQLite transaction
//! - Validation reads the database through the same transaction, so rules
//!   such as name uniqueness and slot clashes see a consistent snapshot
//! - Saving a camp inactive removes its instructor assignments before commit
//!
//! # Examples
//!
//! ```no_run
//! use camp_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for registry operations
//! ```

#![warn(missing_docs)]

mod assignments;
mod camps;
mod curriculums;
mod instructors;
mod locations;
mod lookup;
mod rows;

use camp_domain::traits::RegistryLookup;
use camp_domain::{Curriculum, FieldErrors, Location, RecordId};
use camp_validator::{ValidationError, Validator};
use chrono::{Local, NaiveDate};
use lookup::SqlLookup;
use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record
        entity: &'static str,
        /// Requested id
        id: RecordId,
    },

    /// The record failed validation
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// A lookup needed by validation failed
    #[error("Lookup failed during validation: {0}")]
    Lookup(String),

    /// The record is still referenced and cannot be removed
    #[error("Record in use: {0}")]
    InUse(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Field errors, if the save was rejected by validation
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            StoreError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::Invalid(errors) => StoreError::Invalid(errors),
            ValidationError::Lookup(msg) => StoreError::Lookup(msg),
        }
    }
}

/// SQLite-backed registry store
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
    validator: Validator,
    today: Option<NaiveDate>,
}

impl SqliteStore {
    /// Open (or create) a store at `path` with the default validation rules
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use camp_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("camps.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::with_validator(path, Validator::default())
    }

    /// Open (or create) a store at `path` that validates with `validator`
    pub fn with_validator<P: AsRef<Path>>(
        path: P,
        validator: Validator,
    ) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let mut store = Self {
            conn,
            validator,
            today: None,
        };
        store.initialize_schema()?;
        debug!("Opened registry store at {}", path.as_ref().display());
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Validation rules applied on every save
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Fix the date used as "today" by date rules, instead of the local clock
    pub fn pin_today(&mut self, today: NaiveDate) {
        self.today = Some(today);
    }

    /// The date camp rules compare against
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl RegistryLookup for SqliteStore {
    type Error = rusqlite::Error;

    fn find_curriculum(&self, id: RecordId) -> Result<Option<Curriculum>, Self::Error> {
        SqlLookup::new(&self.conn).find_curriculum(id)
    }

    fn find_location(&self, id: RecordId) -> Result<Option<Location>, Self::Error> {
        SqlLookup::new(&self.conn).find_location(id)
    }

    fn curriculum_name_taken(
        &self,
        name: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        SqlLookup::new(&self.conn).curriculum_name_taken(name, except)
    }

    fn instructor_email_taken(
        &self,
        email: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        SqlLookup::new(&self.conn).instructor_email_taken(email, except)
    }

    fn camp_slot_taken(
        &self,
        time_slot: &str,
        start_date: NaiveDate,
        location_id: RecordId,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        SqlLookup::new(&self.conn).camp_slot_taken(time_slot, start_date, location_id, except)
    }
}
