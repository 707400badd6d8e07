//! Location rules

use crate::messages;
use crate::validator::is_blank;
use crate::{ValidationError, Validator};
use camp_domain::{FieldErrors, Location};

impl Validator {
    /// Validate a location: a name and a positive capacity
    pub fn validate_location(&self, location: &Location) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();

        if is_blank(Some(&location.name)) {
            errors.add("name", messages::BLANK);
        }
        if location.max_capacity <= 0 {
            errors.add("max_capacity", messages::NOT_POSITIVE);
        }

        errors.into_result().map_err(ValidationError::from)
    }
}
