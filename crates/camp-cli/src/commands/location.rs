//! Location command implementation.

use crate::cli::LocationAction;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use camp_domain::Location;
use camp_store::SqliteStore;

/// Execute a location action.
pub fn execute_location(
    action: LocationAction,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        LocationAction::Add {
            name,
            capacity,
            inactive,
        } => {
            let mut location = Location::new(name, capacity);
            location.active = !inactive;

            let location = store.create_location(location)?;
            println!("{}", formatter.format_locations(&[location])?);
        }
        LocationAction::List { status } => {
            let locations = store.list_locations(status.as_option())?;
            println!("{}", formatter.format_locations(&locations)?);
        }
        LocationAction::Update {
            id,
            name,
            capacity,
            active,
        } => {
            let mut location = store
                .get_location(id)?
                .ok_or_else(|| CliError::NotFound(format!("Location {}", id)))?;
            if let Some(name) = name {
                location.name = name;
            }
            if let Some(capacity) = capacity {
                location.max_capacity = capacity;
            }
            if let Some(active) = active {
                location.active = active;
            }

            store.update_location(&location)?;
            println!("{}", formatter.success(&format!("Updated location {}", id)));
        }
    }

    Ok(())
}
