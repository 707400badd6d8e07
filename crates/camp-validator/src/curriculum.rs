//! Curriculum rules

use crate::messages;
use crate::validator::{is_blank, lookup};
use crate::{ValidationError, Validator};
use camp_domain::traits::RegistryLookup;
use camp_domain::{Curriculum, FieldErrors};
use std::fmt::Display;
use tracing::debug;

impl Validator {
    /// Validate a curriculum
    ///
    /// Checks name presence and case-insensitive uniqueness, that both ratings
    /// are present and in the accepted set, and that `max_rating` exceeds
    /// `min_rating`. The ordering check is skipped when either rating is absent.
    pub fn validate_curriculum<S: RegistryLookup>(
        &self,
        curriculum: &Curriculum,
        store: &S,
    ) -> Result<(), ValidationError>
    where
        S::Error: Display,
    {
        let mut errors = FieldErrors::new();

        if is_blank(Some(&curriculum.name)) {
            errors.add("name", messages::BLANK);
        } else if lookup(store.curriculum_name_taken(curriculum.name.trim(), curriculum.id))? {
            errors.add("name", messages::TAKEN);
        }

        for (field, rating) in [
            ("min_rating", curriculum.min_rating),
            ("max_rating", curriculum.max_rating),
        ] {
            match rating {
                None => errors.add(field, messages::BLANK),
                Some(r) if !self.config.rating_allowed(r) => {
                    errors.add(field, messages::RATING_NOT_INCLUDED)
                }
                Some(_) => {}
            }
        }

        if let (Some(min), Some(max)) = (curriculum.min_rating, curriculum.max_rating) {
            if max <= min {
                errors.add("max_rating", messages::MAX_RATING_NOT_ABOVE_MIN);
            }
        }

        if !errors.is_empty() {
            debug!("Curriculum '{}' rejected: {}", curriculum.name, errors);
        }
        errors.into_result().map_err(ValidationError::from)
    }
}
