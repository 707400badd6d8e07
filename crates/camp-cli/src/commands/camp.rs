//! Camp command implementation.

use crate::cli::{CampAction, CampAddArgs, CampListArgs, CampOrderArg, CampUpdateArgs};
use crate::error::{CliError, Result};
use crate::output::{Formatter, NamedCamp};
use camp_domain::{Camp, CampOrder, CampQuery};
use camp_store::SqliteStore;
use chrono::NaiveDate;

/// Execute a camp action.
pub fn execute_camp(action: CampAction, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    match action {
        CampAction::Add(args) => {
            let camp = store.create_camp(new_camp(args))?;
            println!("{}", formatter.format_camps(&named(store, vec![camp])?)?);
        }
        CampAction::List(args) => {
            let camps = store.query_camps(&build_query(&args, store.today()))?;
            println!("{}", formatter.format_camps(&named(store, camps)?)?);
        }
        CampAction::Show { id } => {
            let camp = store
                .get_camp(id)?
                .ok_or_else(|| CliError::NotFound(format!("Camp {}", id)))?;
            println!("{}", formatter.format_camps(&named(store, vec![camp])?)?);
            println!("{}", formatter.format_instructors(&store.instructors_for_camp(id)?)?);
        }
        CampAction::Update(args) => {
            let id = args.id;
            let mut camp = store
                .get_camp(id)?
                .ok_or_else(|| CliError::NotFound(format!("Camp {}", id)))?;
            apply_update(&mut camp, args);

            let removed = store.update_camp(&camp)?;
            println!("{}", formatter.success(&format!("Updated camp {}", id)));
            if removed > 0 {
                println!(
                    "{}",
                    formatter.warning(&format!("Removed {} instructor assignment(s)", removed))
                );
            }
        }
        CampAction::Deactivate { id } => {
            let removed = store.deactivate_camp(id)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Deactivated camp {} and removed {} instructor assignment(s)",
                    id, removed
                ))
            );
        }
    }

    Ok(())
}

fn new_camp(args: CampAddArgs) -> Camp {
    Camp {
        id: None,
        curriculum_id: Some(args.curriculum),
        location_id: Some(args.location),
        start_date: Some(args.start),
        end_date: Some(args.end.unwrap_or(args.start)),
        time_slot: Some(args.slot.trim().to_lowercase()),
        cost: args.cost,
        max_students: args.max_students,
        active: true,
    }
}

/// Translate list flags into a camp query.
pub fn build_query(args: &CampListArgs, today: NaiveDate) -> CampQuery {
    CampQuery {
        active: args.status.as_option(),
        time_slot: args.slot.map(Into::into),
        curriculum_id: args.curriculum,
        starts_on_or_after: args.upcoming.then_some(today),
        ends_on_or_before: args.past.then_some(today),
        order: args.order.map(|order| match order {
            CampOrderArg::Alphabetical => CampOrder::Alphabetical,
            CampOrderArg::Chronological => CampOrder::Chronological,
        }),
    }
}

fn apply_update(camp: &mut Camp, args: CampUpdateArgs) {
    if let Some(curriculum) = args.curriculum {
        camp.curriculum_id = Some(curriculum);
    }
    if let Some(location) = args.location {
        camp.location_id = Some(location);
    }
    if let Some(start) = args.start {
        camp.start_date = Some(start);
    }
    if let Some(end) = args.end {
        camp.end_date = Some(end);
    }
    if let Some(slot) = args.slot {
        camp.time_slot = Some(slot.trim().to_lowercase());
    }
    if let Some(cost) = args.cost {
        camp.cost = cost;
    }
    if args.no_max_students {
        camp.max_students = None;
    } else if args.max_students.is_some() {
        camp.max_students = args.max_students;
    }
    if let Some(active) = args.active {
        camp.active = active;
    }
}

fn named(store: &SqliteStore, camps: Vec<Camp>) -> Result<Vec<NamedCamp>> {
    camps
        .into_iter()
        .map(|camp| -> Result<NamedCamp> {
            let name = match camp.id {
                Some(id) => store.camp_name(id)?,
                None => String::new(),
            };
            Ok(NamedCamp { camp, name })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{SlotArg, StatusFilter};
    use crate::config::OutputFormat;
    use camp_domain::{Curriculum, Instructor, Location, TimeSlot};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    fn seeded_store() -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store.pin_today(today());
        store
            .create_curriculum(Curriculum::new("Tactics", 100, 2000))
            .unwrap();
        store.create_location(Location::new("North Side", 20)).unwrap();
        store
    }

    fn add_args(slot: &str) -> CampAddArgs {
        CampAddArgs {
            curriculum: 1,
            location: 1,
            start: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
            end: None,
            slot: slot.to_string(),
            cost: 50.0,
            max_students: Some(15),
        }
    }

    #[test]
    fn test_build_query() {
        let args = CampListArgs {
            status: StatusFilter {
                active: true,
                inactive: false,
            },
            slot: Some(SlotArg::Morning),
            upcoming: true,
            order: Some(CampOrderArg::Chronological),
            ..Default::default()
        };

        let query = build_query(&args, today());
        assert_eq!(query.active, Some(true));
        assert_eq!(query.time_slot, Some(TimeSlot::Am));
        assert_eq!(query.starts_on_or_after, Some(today()));
        assert!(query.ends_on_or_before.is_none());
        assert_eq!(query.order, Some(CampOrder::Chronological));
    }

    #[test]
    fn test_add_defaults_end_to_start() {
        let camp = new_camp(add_args(" AM "));
        assert_eq!(camp.end_date, camp.start_date);
        assert_eq!(camp.slot(), Some(TimeSlot::Am));
    }

    #[test]
    fn test_bad_slot_is_rejected() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_camp(CampAction::Add(add_args("noon")), &mut store, &formatter)
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains("time_slot"));
    }

    #[test]
    fn test_deactivate_releases_instructors() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_camp(CampAction::Add(add_args("am")), &mut store, &formatter).unwrap();
        let instructor = store
            .create_instructor(Instructor::new("Mark", "Heimann", "mark@example.com"))
            .unwrap();
        store.assign_instructor(1, instructor.id.unwrap()).unwrap();

        execute_camp(CampAction::Deactivate { id: 1 }, &mut store, &formatter).unwrap();

        assert!(store.assignments_for_camp(1).unwrap().is_empty());
        assert!(!store.get_camp(1).unwrap().unwrap().active);
    }

    #[test]
    fn test_update_clears_cap() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        execute_camp(CampAction::Add(add_args("pm")), &mut store, &formatter).unwrap();

        let args = CampUpdateArgs {
            id: 1,
            cost: Some(65.0),
            no_max_students: true,
            ..Default::default()
        };
        execute_camp(CampAction::Update(args), &mut store, &formatter).unwrap();

        let camp = store.get_camp(1).unwrap().unwrap();
        assert_eq!(camp.cost, 65.0);
        assert!(camp.max_students.is_none());
    }
}
