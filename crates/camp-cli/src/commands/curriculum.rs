//! Curriculum command implementation.

use crate::cli::CurriculumAction;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use camp_domain::{Curriculum, CurriculumQuery, RecordId};
use camp_store::SqliteStore;

/// Execute a curriculum action.
pub fn execute_curriculum(
    action: CurriculumAction,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        CurriculumAction::Add {
            name,
            min,
            max,
            description,
            inactive,
        } => {
            let mut curriculum = Curriculum::new(name, min, max);
            curriculum.description = description;
            curriculum.active = !inactive;

            let curriculum = store.create_curriculum(curriculum)?;
            println!("{}", formatter.format_curriculums(&[curriculum])?);
        }
        CurriculumAction::List {
            status,
            rating,
            alphabetical,
        } => {
            let query = CurriculumQuery {
                active: status.as_option(),
                rating,
                alphabetical,
            };
            let curriculums = store.query_curriculums(&query)?;
            println!("{}", formatter.format_curriculums(&curriculums)?);
        }
        CurriculumAction::Show { id } => {
            let curriculum = load(store, id)?;
            println!("{}", formatter.format_curriculums(&[curriculum])?);
        }
        CurriculumAction::Update {
            id,
            name,
            min,
            max,
            description,
            active,
        } => {
            let mut curriculum = load(store, id)?;
            if let Some(name) = name {
                curriculum.name = name;
            }
            if min.is_some() {
                curriculum.min_rating = min;
            }
            if max.is_some() {
                curriculum.max_rating = max;
            }
            if let Some(description) = description {
                curriculum.description = Some(description).filter(|d| !d.trim().is_empty());
            }
            if let Some(active) = active {
                curriculum.active = active;
            }

            store.update_curriculum(&curriculum)?;
            println!("{}", formatter.success(&format!("Updated curriculum {}", id)));
        }
        CurriculumAction::Delete { id } => {
            store.delete_curriculum(id)?;
            println!("{}", formatter.success(&format!("Deleted curriculum {}", id)));
        }
    }

    Ok(())
}

fn load(store: &SqliteStore, id: RecordId) -> Result<Curriculum> {
    store
        .get_curriculum(id)?
        .ok_or_else(|| CliError::NotFound(format!("Curriculum {}", id)))
}
