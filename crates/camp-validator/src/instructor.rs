//! Instructor rules

use crate::messages;
use crate::validator::{is_blank, lookup};
use crate::{ValidationError, Validator};
use camp_domain::traits::RegistryLookup;
use camp_domain::{normalize_phone, FieldErrors, Instructor};
use std::fmt::Display;
use tracing::debug;

impl Validator {
    /// Validate an instructor
    ///
    /// The phone number is checked in its normalized (digits only) form, the
    /// same form the store persists. A phone with no digits counts as absent.
    pub fn validate_instructor<S: RegistryLookup>(
        &self,
        instructor: &Instructor,
        store: &S,
    ) -> Result<(), ValidationError>
    where
        S::Error: Display,
    {
        let mut errors = FieldErrors::new();

        if is_blank(Some(&instructor.first_name)) {
            errors.add("first_name", messages::BLANK);
        }
        if is_blank(Some(&instructor.last_name)) {
            errors.add("last_name", messages::BLANK);
        }

        let email = instructor.email.trim();
        if email.is_empty() {
            errors.add("email", messages::BLANK);
        } else {
            if !self.email_matches(email) {
                errors.add("email", messages::BAD_EMAIL);
            }
            if lookup(store.instructor_email_taken(email, instructor.id))? {
                errors.add("email", messages::TAKEN);
            }
        }

        if let Some(digits) = instructor.phone.as_deref().and_then(normalize_phone) {
            if !self.phone_matches(&digits) {
                errors.add("phone", messages::BAD_PHONE);
            }
        }

        if !errors.is_empty() {
            debug!("Instructor '{}' rejected: {}", instructor.proper_name(), errors);
        }
        errors.into_result().map_err(ValidationError::from)
    }
}
