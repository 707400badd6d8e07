//! Messages attached to rejected fields

/// Required field is missing or blank
pub const BLANK: &str = "can't be blank";
/// Value collides with another record
pub const TAKEN: &str = "has already been taken";
/// Rating outside the accepted set
pub const RATING_NOT_INCLUDED: &str = "is not included in the list";
/// `max_rating` not above `min_rating`
pub const MAX_RATING_NOT_ABOVE_MIN: &str = "must be greater than the minimum rating";
/// Negative cost
pub const NEGATIVE_COST: &str = "must be greater than or equal to 0";
/// Start date before today on create
pub const START_IN_PAST: &str = "cannot be in the past";
/// End date before start date
pub const END_BEFORE_START: &str = "must be on or after the start date";
/// End date missing
pub const INVALID_DATE: &str = "is not a valid date";
/// Time slot other than `am` / `pm`
pub const BAD_TIME_SLOT: &str = "is not an accepted time slot";
/// Another camp holds the same slot, date and location
pub const DUPLICATE_CAMP: &str = "already exists for start date, time slot and location";
/// Count that must be positive
pub const NOT_POSITIVE: &str = "must be greater than 0";
/// Enrollment cap above the venue's capacity
pub const OVER_CAPACITY: &str = "is greater than the location capacity";
/// Referenced record is inactive
pub const INACTIVE: &str = "is not currently active";
/// Malformed email
pub const BAD_EMAIL: &str = "is not a valid format";
/// Malformed phone number
pub const BAD_PHONE: &str = "should be 10 digits (area code needed) and delimited with dashes only";
