//! Camp rules

use crate::messages;
use crate::validator::{is_blank, lookup};
use crate::{SaveContext, ValidationError, Validator};
use camp_domain::traits::RegistryLookup;
use camp_domain::{Camp, FieldErrors, Location};
use chrono::NaiveDate;
use std::fmt::Display;
use tracing::debug;

impl Validator {
    /// Validate a camp
    ///
    /// # Arguments
    ///
    /// * `camp` - The camp to validate
    /// * `context` - Whether the camp is being created or updated
    /// * `today` - Date the past-start rule compares against
    /// * `store` - Lookup for the referenced curriculum, location and clashing camps
    ///
    /// The past-start and duplicate-slot rules only run on create, so an
    /// existing camp whose dates have passed stays editable. Referential rules
    /// are skipped when the reference does not resolve.
    pub fn validate_camp<S: RegistryLookup>(
        &self,
        camp: &Camp,
        context: SaveContext,
        today: NaiveDate,
        store: &S,
    ) -> Result<(), ValidationError>
    where
        S::Error: Display,
    {
        let mut errors = FieldErrors::new();

        // 1. Presence
        if camp.curriculum_id.is_none() {
            errors.add("curriculum_id", messages::BLANK);
        }
        if camp.location_id.is_none() {
            errors.add("location_id", messages::BLANK);
        }
        if camp.start_date.is_none() {
            errors.add("start_date", messages::BLANK);
        }
        if is_blank(camp.time_slot.as_deref()) {
            errors.add("time_slot", messages::BLANK);
        }

        // 2. Cost
        if camp.cost.is_nan() || camp.cost < 0.0 {
            errors.add("cost", messages::NEGATIVE_COST);
        }

        // 3-4. Dates
        if context == SaveContext::Create {
            if let Some(start) = camp.start_date {
                if start < today {
                    errors.add("start_date", messages::START_IN_PAST);
                }
            }
        }
        match (camp.start_date, camp.end_date) {
            (_, None) => errors.add("end_date", messages::INVALID_DATE),
            (Some(start), Some(end)) if end < start => {
                errors.add("end_date", messages::END_BEFORE_START)
            }
            _ => {}
        }

        // 5. Time slot
        if camp.slot().is_none() {
            errors.add("time_slot", messages::BAD_TIME_SLOT);
        }

        // 6. Enrollment cap
        if let Some(max) = camp.max_students {
            if max <= 0 {
                errors.add("max_students", messages::NOT_POSITIVE);
            }
        }

        // 7. Active curriculum
        if let Some(id) = camp.curriculum_id {
            if let Some(curriculum) = lookup(store.find_curriculum(id))? {
                if !curriculum.active {
                    errors.add("curriculum", messages::INACTIVE);
                }
            }
        }

        // 8. Active location
        let location = match camp.location_id {
            Some(id) => lookup(store.find_location(id))?,
            None => None,
        };
        if let Some(location) = &location {
            if !location.active {
                errors.add("location", messages::INACTIVE);
            }
        }

        // 9. Slot clash
        if context == SaveContext::Create {
            if let Some((slot, start, location_id)) = camp.slot_key() {
                if lookup(store.camp_slot_taken(slot, start, location_id, camp.id))? {
                    errors.add("time_slot", messages::DUPLICATE_CAMP);
                }
            }
        }

        // 10. Capacity
        if let (Some(max), Some(location)) = (camp.max_students, &location) {
            if exceeds_capacity(max, location) {
                errors.add("max_students", messages::OVER_CAPACITY);
            }
        }

        if !errors.is_empty() {
            debug!("Camp {:?} rejected on {:?}: {}", camp.id, context, errors);
        }
        errors.into_result().map_err(ValidationError::from)
    }
}

fn exceeds_capacity(max_students: i64, location: &Location) -> bool {
    !location.fits(max_students)
}

#[cfg(test)]
mod tests {
    use crate::messages;
    use crate::validator::testing::MockStore;
    use crate::{SaveContext, ValidationError, Validator};
    use camp_domain::{Camp, Curriculum, FieldErrors, Location, TimeSlot};
    use chrono::{Days, NaiveDate};

    const TACTICS: i64 = 1;
    const CMU: i64 = 10;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
    }

    fn days_from_today(n: i64) -> NaiveDate {
        if n >= 0 {
            today().checked_add_days(Days::new(n as u64)).unwrap()
        } else {
            today().checked_sub_days(Days::new(n.unsigned_abs())).unwrap()
        }
    }

    fn store() -> MockStore {
        let mut tactics = Curriculum::new("Tactics", 100, 2000);
        tactics.id = Some(TACTICS);
        let mut cmu = Location::new("CMU", 20);
        cmu.id = Some(CMU);
        MockStore {
            curriculums: vec![tactics],
            locations: vec![cmu],
            ..Default::default()
        }
    }

    fn camp() -> Camp {
        let tomorrow = days_from_today(1);
        Camp::new(TACTICS, CMU, tomorrow, tomorrow, TimeSlot::Am, 50.0).with_max_students(15)
    }

    fn errors_for(camp: &Camp, context: SaveContext, store: &MockStore) -> FieldErrors {
        match Validator::default().validate_camp(camp, context, today(), store) {
            Ok(()) => FieldErrors::new(),
            Err(ValidationError::Invalid(errors)) => errors,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_valid_camp() {
        assert!(errors_for(&camp(), SaveContext::Create, &store()).is_empty());
    }

    #[test]
    fn test_presence() {
        let mut c = camp();
        c.curriculum_id = None;
        c.location_id = None;
        c.start_date = None;
        c.time_slot = None;
        let errors = errors_for(&c, SaveContext::Create, &store());

        for field in ["curriculum_id", "location_id", "start_date", "time_slot"] {
            assert!(errors.has(field, messages::BLANK), "{field}");
        }
    }

    #[test]
    fn test_cost() {
        for ok in [0.0, 125.0, 125.5] {
            let mut c = camp();
            c.cost = ok;
            assert!(errors_for(&c, SaveContext::Create, &store()).is_empty(), "{ok}");
        }
        for bad in [-29.0, f64::NAN] {
            let mut c = camp();
            c.cost = bad;
            assert!(errors_for(&c, SaveContext::Create, &store()).has("cost", messages::NEGATIVE_COST));
        }
    }

    #[test]
    fn test_start_date_today_is_allowed() {
        let mut c = camp();
        c.start_date = Some(today());
        c.end_date = Some(today());
        assert!(errors_for(&c, SaveContext::Create, &store()).is_empty());
    }

    #[test]
    fn test_start_date_in_past_rejected_on_create_only() {
        let mut c = camp();
        c.start_date = Some(days_from_today(-7));
        c.end_date = Some(days_from_today(-2));

        let errors = errors_for(&c, SaveContext::Create, &store());
        assert!(errors.has("start_date", messages::START_IN_PAST));

        c.id = Some(5);
        assert!(errors_for(&c, SaveContext::Update, &store()).is_empty());
    }

    #[test]
    fn test_end_date_before_start_always_rejected() {
        let mut c = camp();
        c.start_date = Some(days_from_today(9));
        c.end_date = Some(days_from_today(5));

        assert!(errors_for(&c, SaveContext::Create, &store()).has("end_date", messages::END_BEFORE_START));
        c.id = Some(5);
        assert!(errors_for(&c, SaveContext::Update, &store()).has("end_date", messages::END_BEFORE_START));
    }

    #[test]
    fn test_end_date_required() {
        let mut c = camp();
        c.end_date = None;
        assert!(errors_for(&c, SaveContext::Create, &store()).has("end_date", messages::INVALID_DATE));
    }

    #[test]
    fn test_time_slot_values() {
        for bad in ["bad", "12:00", "1200", "morning"] {
            let mut c = camp();
            c.time_slot = Some(bad.to_string());
            let errors = errors_for(&c, SaveContext::Create, &store());
            assert!(errors.has("time_slot", messages::BAD_TIME_SLOT), "{bad}");
        }
        let mut c = camp();
        c.time_slot = Some("pm".to_string());
        assert!(errors_for(&c, SaveContext::Create, &store()).is_empty());
    }

    #[test]
    fn test_max_students_positive() {
        for bad in [0, -5] {
            let c = camp().with_max_students(bad);
            assert!(errors_for(&c, SaveContext::Create, &store()).has("max_students", messages::NOT_POSITIVE));
        }
        let mut c = camp();
        c.max_students = None;
        assert!(errors_for(&c, SaveContext::Create, &store()).is_empty());
    }

    #[test]
    fn test_inactive_curriculum() {
        let mut s = store();
        s.curriculums[0].active = false;
        assert!(errors_for(&camp(), SaveContext::Create, &s).has("curriculum", messages::INACTIVE));
    }

    #[test]
    fn test_inactive_location() {
        let mut s = store();
        s.locations[0].active = false;
        assert!(errors_for(&camp(), SaveContext::Create, &s).has("location", messages::INACTIVE));
    }

    #[test]
    fn test_unresolved_references_are_skipped() {
        let mut c = camp();
        c.curriculum_id = Some(99);
        c.location_id = Some(99);
        let errors = errors_for(&c, SaveContext::Create, &store());
        assert!(!errors.contains("curriculum"));
        assert!(!errors.contains("location"));
        assert!(!errors.contains("max_students"));
    }

    #[test]
    fn test_duplicate_slot_rejected_on_create() {
        let c = camp();
        let mut s = store();
        s.slots.push((7, "am".to_string(), c.start_date.unwrap(), CMU));

        assert!(errors_for(&c, SaveContext::Create, &s).has("time_slot", messages::DUPLICATE_CAMP));
    }

    #[test]
    fn test_same_slot_other_location_allowed() {
        let c = camp();
        let mut s = store();
        s.slots.push((7, "am".to_string(), c.start_date.unwrap(), CMU + 1));

        assert!(errors_for(&c, SaveContext::Create, &s).is_empty());
    }

    #[test]
    fn test_duplicate_slot_not_checked_on_update() {
        let mut c = camp();
        c.id = Some(8);
        let mut s = store();
        s.slots.push((7, "am".to_string(), c.start_date.unwrap(), CMU));

        assert!(errors_for(&c, SaveContext::Update, &s).is_empty());
    }

    #[test]
    fn test_capacity() {
        let over = camp().with_max_students(25);
        let errors = errors_for(&over, SaveContext::Create, &store());
        assert!(errors.has("max_students", messages::OVER_CAPACITY));

        let at = camp().with_max_students(20);
        assert!(errors_for(&at, SaveContext::Create, &store()).is_empty());
    }

    #[test]
    fn test_all_violations_collected() {
        let mut c = camp().with_max_students(25);
        c.cost = -1.0;
        c.time_slot = Some("noon".to_string());
        let errors = errors_for(&c, SaveContext::Create, &store());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["cost", "max_students", "time_slot"]);
    }

    #[test]
    fn test_lookup_failure() {
        let mut s = store();
        s.fail = true;
        let result = Validator::default().validate_camp(&camp(), SaveContext::Create, today(), &s);
        assert!(matches!(result, Err(ValidationError::Lookup(msg)) if msg.contains("disk I/O")));
    }
}
