//! Curriculum persistence and queries

use crate::lookup::{fold_key, SqlLookup};
use crate::rows::{curriculum_from_row, query_all, CURRICULUM_COLUMNS};
use crate::{SqliteStore, StoreError};
use camp_domain::traits::RegistryLookup;
use camp_domain::{Curriculum, CurriculumQuery, RecordId};
use rusqlite::params;
use tracing::info;

impl SqliteStore {
    /// Validate and insert a new curriculum, returning it with its id
    pub fn create_curriculum(&mut self, mut curriculum: Curriculum) -> Result<Curriculum, StoreError> {
        curriculum.id = None;
        curriculum.name = curriculum.name.trim().to_string();

        let tx = self.conn.transaction()?;
        self.validator
            .validate_curriculum(&curriculum, &SqlLookup::new(&tx))?;

        tx.execute(
            "INSERT INTO curriculums (name, name_key, description, min_rating, max_rating, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &curriculum.name,
                fold_key(&curriculum.name),
                &curriculum.description,
                curriculum.min_rating,
                curriculum.max_rating,
                curriculum.active,
            ],
        )?;
        curriculum.id = Some(tx.last_insert_rowid());
        tx.commit()?;

        info!("Created curriculum '{}' ({:?})", curriculum.name, curriculum.id);
        Ok(curriculum)
    }

    /// Validate and rewrite an existing curriculum
    pub fn update_curriculum(&mut self, curriculum: &Curriculum) -> Result<(), StoreError> {
        let id = curriculum
            .id
            .ok_or_else(|| StoreError::InvalidData("curriculum has no id".to_string()))?;

        let tx = self.conn.transaction()?;
        self.validator
            .validate_curriculum(curriculum, &SqlLookup::new(&tx))?;

        let updated = tx.execute(
            "UPDATE curriculums
             SET name = ?1, name_key = ?2, description = ?3, min_rating = ?4, max_rating = ?5,
                 active = ?6
             WHERE id = ?7",
            params![
                curriculum.name.trim(),
                fold_key(&curriculum.name),
                &curriculum.description,
                curriculum.min_rating,
                curriculum.max_rating,
                curriculum.active,
                id,
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound { entity: "Curriculum", id });
        }
        tx.commit()?;
        Ok(())
    }

    /// Get a curriculum by ID
    pub fn get_curriculum(&self, id: RecordId) -> Result<Option<Curriculum>, StoreError> {
        Ok(self.find_curriculum(id)?)
    }

    /// List curricula matching `query`
    pub fn query_curriculums(&self, query: &CurriculumQuery) -> Result<Vec<Curriculum>, StoreError> {
        let mut sql = format!("SELECT {CURRICULUM_COLUMNS} FROM curriculums WHERE 1=1");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(active) = query.active {
            sql.push_str(" AND active = ?");
            params.push(Box::new(active));
        }

        if let Some(rating) = query.rating {
            sql.push_str(" AND min_rating <= ? AND max_rating >= ?");
            params.push(Box::new(rating));
            params.push(Box::new(rating));
        }

        if query.alphabetical {
            sql.push_str(" ORDER BY name");
        } else {
            sql.push_str(" ORDER BY id");
        }

        Ok(query_all(&self.conn, &sql, &params, curriculum_from_row)?)
    }

    /// Delete a curriculum no camp references
    pub fn delete_curriculum(&mut self, id: RecordId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        let camps: i64 = tx.query_row(
            "SELECT COUNT(*) FROM camps WHERE curriculum_id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        if camps > 0 {
            return Err(StoreError::InUse(format!(
                "curriculum {} is referenced by {} camp(s)",
                id, camps
            )));
        }

        let deleted = tx.execute("DELETE FROM curriculums WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound { entity: "Curriculum", id });
        }
        tx.commit()?;

        info!("Deleted curriculum {}", id);
        Ok(())
    }
}
