//! Registry lookups over a borrowed connection
//!
//! Saves validate through the open transaction (a `Transaction` derefs to a
//! `Connection`), so this wrapper borrows rather than owns.

use crate::rows::{curriculum_from_row, location_from_row, CURRICULUM_COLUMNS, LOCATION_COLUMNS};
use camp_domain::traits::RegistryLookup;
use camp_domain::{Curriculum, Location, RecordId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

/// Case-folded form stored in the `name_key` and `email_key` columns
///
/// SQLite's `lower()` only folds ASCII, so keys are computed here.
pub(crate) fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) struct SqlLookup<'c> {
    conn: &'c Connection,
}

impl<'c> SqlLookup<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl RegistryLookup for SqlLookup<'_> {
    type Error = rusqlite::Error;

    fn find_curriculum(&self, id: RecordId) -> Result<Option<Curriculum>, Self::Error> {
        self.conn
            .query_row(
                &format!("SELECT {CURRICULUM_COLUMNS} FROM curriculums WHERE id = ?1"),
                params![id],
                curriculum_from_row,
            )
            .optional()
    }

    fn find_location(&self, id: RecordId) -> Result<Option<Location>, Self::Error> {
        self.conn
            .query_row(
                &format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = ?1"),
                params![id],
                location_from_row,
            )
            .optional()
    }

    fn curriculum_name_taken(
        &self,
        name: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        self.conn.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM curriculums
                 WHERE name_key = ?1 AND (?2 IS NULL OR id <> ?2)
             )",
            params![fold_key(name), except],
            |row| row.get(0),
        )
    }

    fn instructor_email_taken(
        &self,
        email: &str,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        self.conn.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM instructors
                 WHERE email_key = ?1 AND (?2 IS NULL OR id <> ?2)
             )",
            params![fold_key(email), except],
            |row| row.get(0),
        )
    }

    fn camp_slot_taken(
        &self,
        time_slot: &str,
        start_date: NaiveDate,
        location_id: RecordId,
        except: Option<RecordId>,
    ) -> Result<bool, Self::Error> {
        self.conn.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM camps
                 WHERE time_slot = ?1 AND start_date = ?2 AND location_id = ?3
                   AND (?4 IS NULL OR id <> ?4)
             )",
            params![time_slot, start_date, location_id, except],
            |row| row.get(0),
        )
    }
}
