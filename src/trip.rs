//! Trip metadata for Tripdeck
//!
//! Trip-wide details (name, start and end dates) live outside the
//! itinerary itself: they are supplied to view building at render time
//! rather than stored with the destinations.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Placeholder shown when the user has not named the trip.
pub const DEFAULT_TRIP_NAME: &str = "My Travel Itinerary";

/// Errors produced when applying trip settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// A date field is present but not a valid calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The trip start date is earlier than today
    #[error("Cannot select a start date before today")]
    StartDateInPast,
}

/// Parses an optional date field: a blank field clears the value,
/// anything else must be a valid `YYYY-MM-DD` date.
pub fn parse_optional_date(s: &str) -> Result<Option<NaiveDate>, TripError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|_| TripError::InvalidDate(s.to_string()))
}

/// User-supplied trip name and overall start/end dates.
///
/// The end date bounds destination dates at insertion time only:
/// destinations already added are not re-validated when it changes
/// later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TripDetails {
    /// Trip name; may be blank, in which case the placeholder is shown
    pub name: String,
    /// First day of the trip, if set
    pub start_date: Option<NaiveDate>,
    /// Last day of the trip, if set
    pub end_date: Option<NaiveDate>,
}

impl TripDetails {
    /// Returns the trip name to display, falling back to the
    /// placeholder when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_TRIP_NAME
        } else {
            &self.name
        }
    }
}
