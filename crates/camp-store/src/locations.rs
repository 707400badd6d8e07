//! Location persistence

use crate::rows::{location_from_row, query_all, LOCATION_COLUMNS};
use crate::{SqliteStore, StoreError};
use camp_domain::traits::RegistryLookup;
use camp_domain::{Location, RecordId};
use rusqlite::params;
use tracing::info;

impl SqliteStore {
    /// Validate and insert a new location, returning it with its id
    pub fn create_location(&mut self, mut location: Location) -> Result<Location, StoreError> {
        location.id = None;
        location.name = location.name.trim().to_string();

        let tx = self.conn.transaction()?;
        self.validator.validate_location(&location)?;

        tx.execute(
            "INSERT INTO locations (name, max_capacity, active) VALUES (?1, ?2, ?3)",
            params![&location.name, location.max_capacity, location.active],
        )?;
        location.id = Some(tx.last_insert_rowid());
        tx.commit()?;

        info!("Created location '{}' ({:?})", location.name, location.id);
        Ok(location)
    }

    /// Validate and rewrite an existing location
    pub fn update_location(&mut self, location: &Location) -> Result<(), StoreError> {
        let id = location
            .id
            .ok_or_else(|| StoreError::InvalidData("location has no id".to_string()))?;

        let tx = self.conn.transaction()?;
        self.validator.validate_location(location)?;

        let updated = tx.execute(
            "UPDATE locations SET name = ?1, max_capacity = ?2, active = ?3 WHERE id = ?4",
            params![location.name.trim(), location.max_capacity, location.active, id],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound { entity: "Location", id });
        }
        tx.commit()?;
        Ok(())
    }

    /// Get a location by ID
    pub fn get_location(&self, id: RecordId) -> Result<Option<Location>, StoreError> {
        Ok(self.find_location(id)?)
    }

    /// List locations by name, optionally filtered by the active flag
    pub fn list_locations(&self, active: Option<bool>) -> Result<Vec<Location>, StoreError> {
        let mut sql = format!("SELECT {LOCATION_COLUMNS} FROM locations");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(active) = active {
            sql.push_str(" WHERE active = ?");
            params.push(Box::new(active));
        }
        sql.push_str(" ORDER BY name, id");

        Ok(query_all(&self.conn, &sql, &params, location_from_row)?)
    }
}
