//! Instructor module - staff assignable to camps

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A staff member who can teach camps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Store-assigned id (`None` until persisted)
    pub id: Option<RecordId>,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact address, unique ignoring case
    pub email: String,

    /// Ten-digit phone number, digits only once normalized
    pub phone: Option<String>,

    /// Short biography shown to families
    pub bio: Option<String>,

    /// Whether the instructor is on staff
    pub active: bool,
}

impl Instructor {
    /// Create a new, active, unsaved instructor
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            bio: None,
            active: true,
        }
    }

    /// Set the phone number as submitted
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the biography
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Sort-friendly name, `"last, first"`
    pub fn name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Display name, `"first last"`
    pub fn proper_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Strip the phone number down to digits before it is checked or stored
    pub fn normalize(&mut self) {
        self.phone = self.phone.as_deref().and_then(normalize_phone);
    }
}

/// Remove every non-digit character. An input with no digits becomes `None`.
///
/// ```
/// use camp_domain::normalize_phone;
///
/// assert_eq!(normalize_phone("(412) 555-1234").as_deref(), Some("4125551234"));
/// assert_eq!(normalize_phone(" - "), None);
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalized phones contain only digits
        #[test]
        fn test_normalized_phone_is_digits(raw in ".{0,30}") {
            if let Some(phone) = normalize_phone(&raw) {
                prop_assert!(!phone.is_empty());
                prop_assert!(phone.chars().all(|c| c.is_ascii_digit()));
            }
        }

        /// Property: normalizing twice changes nothing
        #[test]
        fn test_normalize_phone_idempotent(raw in ".{0,30}") {
            let once = normalize_phone(&raw);
            let twice = once.as_deref().and_then(normalize_phone);
            prop_assert_eq!(once, twice);
        }

        /// Property: both derived names contain both name parts
        #[test]
        fn test_derived_names_contain_parts(first in "[A-Za-z]{1,12}", last in "[A-Za-z]{1,12}") {
            let i = Instructor::new(first.clone(), last.clone(), "x@example.com");
            prop_assert_eq!(i.name(), format!("{}, {}", last, first));
            prop_assert_eq!(i.proper_name(), format!("{} {}", first, last));
        }
    }
}
