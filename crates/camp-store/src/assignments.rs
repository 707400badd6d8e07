//! Camp instructor assignments

use crate::rows::{assignment_from_row, query_all};
use crate::{SqliteStore, StoreError};
use camp_domain::{CampInstructor, FieldErrors, RecordId};
use rusqlite::params;
use tracing::info;

impl SqliteStore {
    /// Assign an instructor to a camp
    ///
    /// Both records must exist, and a pair can only be assigned once.
    pub fn assign_instructor(
        &mut self,
        camp_id: RecordId,
        instructor_id: RecordId,
    ) -> Result<CampInstructor, StoreError> {
        let tx = self.conn.transaction()?;

        let exists = |table: &str, id: RecordId| -> rusqlite::Result<bool> {
            tx.query_row(
                &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)"),
                params![id],
                |row| row.get(0),
            )
        };
        if !exists("camps", camp_id)? {
            return Err(StoreError::NotFound { entity: "Camp", id: camp_id });
        }
        if !exists("instructors", instructor_id)? {
            return Err(StoreError::NotFound {
                entity: "Instructor",
                id: instructor_id,
            });
        }

        let assigned: bool = tx.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM camp_instructors WHERE camp_id = ?1 AND instructor_id = ?2
             )",
            params![camp_id, instructor_id],
            |row| row.get(0),
        )?;
        if assigned {
            let mut errors = FieldErrors::new();
            errors.add("instructor_id", "is already assigned to this camp");
            return Err(StoreError::Invalid(errors));
        }

        tx.execute(
            "INSERT INTO camp_instructors (camp_id, instructor_id) VALUES (?1, ?2)",
            params![camp_id, instructor_id],
        )?;
        let mut assignment = CampInstructor::new(camp_id, instructor_id);
        assignment.id = Some(tx.last_insert_rowid());
        tx.commit()?;

        info!("Assigned instructor {} to camp {}", instructor_id, camp_id);
        Ok(assignment)
    }

    /// Remove an assignment, returning whether one existed
    pub fn unassign_instructor(
        &mut self,
        camp_id: RecordId,
        instructor_id: RecordId,
    ) -> Result<bool, StoreError> {
        let removed = self.conn.execute(
            "DELETE FROM camp_instructors WHERE camp_id = ?1 AND instructor_id = ?2",
            params![camp_id, instructor_id],
        )?;
        if removed > 0 {
            info!("Unassigned instructor {} from camp {}", instructor_id, camp_id);
        }
        Ok(removed > 0)
    }

    /// Assignment rows for a camp
    pub fn assignments_for_camp(&self, camp_id: RecordId) -> Result<Vec<CampInstructor>, StoreError> {
        let params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(camp_id)];
        Ok(query_all(
            &self.conn,
            "SELECT id, camp_id, instructor_id FROM camp_instructors WHERE camp_id = ? ORDER BY id",
            &params,
            assignment_from_row,
        )?)
    }
}
