//! Camp persistence, the deactivation cascade and camp queries

use crate::lookup::SqlLookup;
use crate::rows::{camp_from_row, query_all, CAMP_COLUMNS};
use crate::{SqliteStore, StoreError};
use camp_domain::{Camp, CampOrder, CampQuery, RecordId};
use camp_validator::SaveContext;
use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

impl SqliteStore {
    /// Validate and insert a new camp, returning it with its id
    pub fn create_camp(&mut self, mut camp: Camp) -> Result<Camp, StoreError> {
        camp.id = None;
        let today = self.today();

        let tx = self.conn.transaction()?;
        self.validator
            .validate_camp(&camp, SaveContext::Create, today, &SqlLookup::new(&tx))?;

        tx.execute(
            "INSERT INTO camps (curriculum_id, location_id, start_date, end_date, time_slot,
                                cost, max_students, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                camp.curriculum_id,
                camp.location_id,
                camp.start_date,
                camp.end_date,
                &camp.time_slot,
                camp.cost,
                camp.max_students,
                camp.active,
            ],
        )?;
        camp.id = Some(tx.last_insert_rowid());
        tx.commit()?;

        info!(
            "Created camp {:?} (curriculum {:?}, location {:?}, {:?} {:?})",
            camp.id, camp.curriculum_id, camp.location_id, camp.start_date, camp.time_slot
        );
        Ok(camp)
    }

    /// Validate and rewrite an existing camp
    ///
    /// Saving a camp with `active == false` removes every instructor
    /// assignment for it in the same transaction. Returns the number of
    /// assignments removed.
    pub fn update_camp(&mut self, camp: &Camp) -> Result<usize, StoreError> {
        let id = camp
            .id
            .ok_or_else(|| StoreError::InvalidData("camp has no id".to_string()))?;
        let today = self.today();

        let tx = self.conn.transaction()?;
        self.validator
            .validate_camp(camp, SaveContext::Update, today, &SqlLookup::new(&tx))?;

        let updated = tx.execute(
            "UPDATE camps
             SET curriculum_id = ?1, location_id = ?2, start_date = ?3, end_date = ?4,
                 time_slot = ?5, cost = ?6, max_students = ?7, active = ?8
             WHERE id = ?9",
            params![
                camp.curriculum_id,
                camp.location_id,
                camp.start_date,
                camp.end_date,
                &camp.time_slot,
                camp.cost,
                camp.max_students,
                camp.active,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound { entity: "Camp", id });
        }

        let removed = if camp.active {
            0
        } else {
            tx.execute("DELETE FROM camp_instructors WHERE camp_id = ?1", params![id])?
        };
        tx.commit()?;

        if removed > 0 {
            info!("Camp {} deactivated, removed {} instructor assignment(s)", id, removed);
        } else {
            debug!("Updated camp {}", id);
        }
        Ok(removed)
    }

    /// Load a camp, mark it inactive and save it through [`Self::update_camp`]
    pub fn deactivate_camp(&mut self, id: RecordId) -> Result<usize, StoreError> {
        let mut camp = self
            .get_camp(id)?
            .ok_or(StoreError::NotFound { entity: "Camp", id })?;
        camp.active = false;
        self.update_camp(&camp)
    }

    /// Get a camp by ID
    pub fn get_camp(&self, id: RecordId) -> Result<Option<Camp>, StoreError> {
        let camp = self
            .conn
            .query_row(
                &format!("SELECT {CAMP_COLUMNS} FROM camps WHERE id = ?1"),
                params![id],
                camp_from_row,
            )
            .optional()?;
        Ok(camp)
    }

    /// A camp's display name: the name of its curriculum
    pub fn camp_name(&self, id: RecordId) -> Result<String, StoreError> {
        self.conn
            .query_row(
                "SELECT curriculums.name FROM camps
                 JOIN curriculums ON curriculums.id = camps.curriculum_id
                 WHERE camps.id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(StoreError::NotFound { entity: "Camp", id })
    }

    /// List camps matching `query`
    pub fn query_camps(&self, query: &CampQuery) -> Result<Vec<Camp>, StoreError> {
        let mut sql = format!(
            "SELECT {CAMP_COLUMNS} FROM camps
             JOIN curriculums ON curriculums.id = camps.curriculum_id
             WHERE 1=1"
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(active) = query.active {
            sql.push_str(" AND camps.active = ?");
            params.push(Box::new(active));
        }

        if let Some(slot) = query.time_slot {
            sql.push_str(" AND camps.time_slot = ?");
            params.push(Box::new(slot.as_str()));
        }

        if let Some(curriculum_id) = query.curriculum_id {
            sql.push_str(" AND camps.curriculum_id = ?");
            params.push(Box::new(curriculum_id));
        }

        if let Some(from) = query.starts_on_or_after {
            sql.push_str(" AND camps.start_date >= ?");
            params.push(Box::new(from));
        }

        if let Some(until) = query.ends_on_or_before {
            sql.push_str(" AND camps.end_date <= ?");
            params.push(Box::new(until));
        }

        match query.order {
            Some(CampOrder::Alphabetical) => {
                sql.push_str(" ORDER BY curriculums.name, camps.curriculum_id, camps.id")
            }
            Some(CampOrder::Chronological) => {
                sql.push_str(" ORDER BY camps.start_date, camps.end_date, camps.id")
            }
            None => sql.push_str(" ORDER BY camps.id"),
        }

        Ok(query_all(&self.conn, &sql, &params, camp_from_row)?)
    }

    /// Camps an instructor is assigned to, in chronological order
    pub fn camps_for_instructor(&self, instructor_id: RecordId) -> Result<Vec<Camp>, StoreError> {
        let sql = format!(
            "SELECT {CAMP_COLUMNS} FROM camps
             JOIN camp_instructors ON camp_instructors.camp_id = camps.id
             WHERE camp_instructors.instructor_id = ?
             ORDER BY camps.start_date, camps.end_date, camps.id"
        );
        let params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(instructor_id)];
        Ok(query_all(&self.conn, &sql, &params, camp_from_row)?)
    }
}
