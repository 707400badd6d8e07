//! Assignment command implementation.

use crate::cli::AssignAction;
use crate::error::Result;
use crate::output::Formatter;
use camp_store::SqliteStore;

/// Execute an assignment action.
pub fn execute_assign(action: AssignAction, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    match action {
        AssignAction::Add { camp, instructor } => {
            let assignment = store.assign_instructor(camp, instructor)?;
            println!("{}", formatter.format_assignments(&[assignment])?);
        }
        AssignAction::Remove { camp, instructor } => {
            if store.unassign_instructor(camp, instructor)? {
                println!(
                    "{}",
                    formatter.success(&format!("Removed instructor {} from camp {}", instructor, camp))
                );
            } else {
                println!(
                    "{}",
                    formatter.info(&format!("Instructor {} was not assigned to camp {}", instructor, camp))
                );
            }
        }
        AssignAction::List { camp } => {
            println!("{}", formatter.format_instructors(&store.instructors_for_camp(camp)?)?);
        }
    }

    Ok(())
}
