//! Instructor persistence and queries

use crate::lookup::{fold_key, SqlLookup};
use crate::rows::{instructor_from_row, query_all, INSTRUCTOR_COLUMNS};
use crate::{SqliteStore, StoreError};
use camp_domain::{Instructor, InstructorQuery, RecordId};
use rusqlite::{params, OptionalExtension};
use tracing::info;

impl SqliteStore {
    /// Normalize, validate and insert a new instructor
    ///
    /// The phone number is stored as digits only.
    pub fn create_instructor(&mut self, mut instructor: Instructor) -> Result<Instructor, StoreError> {
        instructor.id = None;
        instructor.normalize();
        trim_fields(&mut instructor);

        let tx = self.conn.transaction()?;
        self.validator
            .validate_instructor(&instructor, &SqlLookup::new(&tx))?;

        tx.execute(
            "INSERT INTO instructors (first_name, last_name, email, email_key, phone, bio, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &instructor.first_name,
                &instructor.last_name,
                &instructor.email,
                fold_key(&instructor.email),
                &instructor.phone,
                &instructor.bio,
                instructor.active,
            ],
        )?;
        instructor.id = Some(tx.last_insert_rowid());
        tx.commit()?;

        info!("Created instructor {} ({:?})", instructor.proper_name(), instructor.id);
        Ok(instructor)
    }

    /// Normalize, validate and rewrite an existing instructor
    ///
    /// `instructor` is normalized in place so the caller sees what was stored.
    pub fn update_instructor(&mut self, instructor: &mut Instructor) -> Result<(), StoreError> {
        let id = instructor
            .id
            .ok_or_else(|| StoreError::InvalidData("instructor has no id".to_string()))?;
        instructor.normalize();
        trim_fields(instructor);

        let tx = self.conn.transaction()?;
        self.validator
            .validate_instructor(instructor, &SqlLookup::new(&tx))?;

        let updated = tx.execute(
            "UPDATE instructors
             SET first_name = ?1, last_name = ?2, email = ?3, email_key = ?4, phone = ?5,
                 bio = ?6, active = ?7
             WHERE id = ?8",
            params![
                &instructor.first_name,
                &instructor.last_name,
                &instructor.email,
                fold_key(&instructor.email),
                &instructor.phone,
                &instructor.bio,
                instructor.active,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound { entity: "Instructor", id });
        }
        tx.commit()?;
        Ok(())
    }

    /// Get an instructor by ID
    pub fn get_instructor(&self, id: RecordId) -> Result<Option<Instructor>, StoreError> {
        let instructor = self
            .conn
            .query_row(
                &format!("SELECT {INSTRUCTOR_COLUMNS} FROM instructors WHERE id = ?1"),
                params![id],
                instructor_from_row,
            )
            .optional()?;
        Ok(instructor)
    }

    /// List instructors matching `query`
    pub fn query_instructors(&self, query: &InstructorQuery) -> Result<Vec<Instructor>, StoreError> {
        let mut sql = format!("SELECT {INSTRUCTOR_COLUMNS} FROM instructors WHERE 1=1");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(active) = query.active {
            sql.push_str(" AND active = ?");
            params.push(Box::new(active));
        }

        if query.needs_bio {
            sql.push_str(" AND bio IS NULL");
        }

        if query.alphabetical {
            sql.push_str(" ORDER BY last_name, first_name, id");
        } else {
            sql.push_str(" ORDER BY id");
        }

        Ok(query_all(&self.conn, &sql, &params, instructor_from_row)?)
    }

    /// Instructors assigned to a camp, alphabetical by last then first name
    pub fn instructors_for_camp(&self, camp_id: RecordId) -> Result<Vec<Instructor>, StoreError> {
        let sql = format!(
            "SELECT {INSTRUCTOR_COLUMNS} FROM instructors
             JOIN camp_instructors ON camp_instructors.instructor_id = instructors.id
             WHERE camp_instructors.camp_id = ?
             ORDER BY instructors.last_name, instructors.first_name, instructors.id"
        );
        let params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(camp_id)];
        Ok(query_all(&self.conn, &sql, &params, instructor_from_row)?)
    }
}

fn trim_fields(instructor: &mut Instructor) {
    for field in [
        &mut instructor.first_name,
        &mut instructor.last_name,
        &mut instructor.email,
    ] {
        *field = field.trim().to_string();
    }
}
