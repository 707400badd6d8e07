//! Instructor command implementation.

use crate::cli::InstructorAction;
use crate::error::{CliError, Result};
use crate::output::{Formatter, NamedCamp};
use camp_domain::{Instructor, InstructorQuery};
use camp_store::SqliteStore;

/// Execute an instructor action.
pub fn execute_instructor(
    action: InstructorAction,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        InstructorAction::Add {
            first_name,
            last_name,
            email,
            phone,
            bio,
        } => {
            let mut instructor = Instructor::new(first_name, last_name, email);
            instructor.phone = phone;
            instructor.bio = bio.filter(|b| !b.trim().is_empty());

            let instructor = store.create_instructor(instructor)?;
            println!("{}", formatter.format_instructors(&[instructor])?);
        }
        InstructorAction::List {
            status,
            needs_bio,
            alphabetical,
        } => {
            let query = InstructorQuery {
                active: status.as_option(),
                needs_bio,
                alphabetical,
            };
            println!("{}", formatter.format_instructors(&store.query_instructors(&query)?)?);
        }
        InstructorAction::Show { id } => {
            let instructor = store
                .get_instructor(id)?
                .ok_or_else(|| CliError::NotFound(format!("Instructor {}", id)))?;
            println!("{}", formatter.format_instructors(&[instructor])?);

            let camps = store
                .camps_for_instructor(id)?
                .into_iter()
                .map(|camp| -> Result<NamedCamp> {
                    let name = match camp.id {
                        Some(camp_id) => store.camp_name(camp_id)?,
                        None => String::new(),
                    };
                    Ok(NamedCamp { camp, name })
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", formatter.format_camps(&camps)?);
        }
        InstructorAction::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            bio,
            active,
        } => {
            let mut instructor = store
                .get_instructor(id)?
                .ok_or_else(|| CliError::NotFound(format!("Instructor {}", id)))?;
            if let Some(first_name) = first_name {
                instructor.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                instructor.last_name = last_name;
            }
            if let Some(email) = email {
                instructor.email = email;
            }
            if let Some(phone) = phone {
                instructor.phone = Some(phone);
            }
            if let Some(bio) = bio {
                instructor.bio = Some(bio).filter(|b| !b.trim().is_empty());
            }
            if let Some(active) = active {
                instructor.active = active;
            }

            store.update_instructor(&mut instructor)?;
            println!(
                "{}",
                formatter.success(&format!("Updated instructor {}", instructor.proper_name()))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_add_normalizes_phone() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_instructor(
            InstructorAction::Add {
                first_name: "Mark".to_string(),
                last_name: "Heimann".to_string(),
                email: "mark@razingrooks.org".to_string(),
                phone: Some("(412) 555-1234".to_string()),
                bio: Some("  ".to_string()),
            },
            &mut store,
            &formatter,
        )
        .unwrap();

        let stored = store.get_instructor(1).unwrap().unwrap();
        assert_eq!(stored.phone.as_deref(), Some("4125551234"));
        assert!(stored.bio.is_none());
    }

    #[test]
    fn test_update_clears_phone() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        store
            .create_instructor(
                Instructor::new("Mark", "Heimann", "mark@example.com").with_phone("412-555-1234"),
            )
            .unwrap();

        execute_instructor(
            InstructorAction::Update {
                id: 1,
                first_name: None,
                last_name: None,
                email: None,
                phone: Some(String::new()),
                bio: Some("Coach".to_string()),
                active: None,
            },
            &mut store,
            &formatter,
        )
        .unwrap();

        let stored = store.get_instructor(1).unwrap().unwrap();
        assert!(stored.phone.is_none());
        assert_eq!(stored.bio.as_deref(), Some("Coach"));
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_instructor(
            InstructorAction::Add {
                first_name: "Mark".to_string(),
                last_name: "Heimann".to_string(),
                email: "mark@example".to_string(),
                phone: None,
                bio: None,
            },
            &mut store,
            &formatter,
        )
        .unwrap_err();
        assert!(err.field_errors().unwrap().contains("email"));
    }
}
