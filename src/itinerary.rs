//! Core itinerary store for Tripdeck
//!
//! This module contains the ordered collection of destinations, the
//! validation applied when a new stop is added, and the errors that
//! validation can produce.

use chrono::{Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One itinerary stop with a name, date, and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Display name of the stop (never empty)
    pub name: String,
    /// Calendar date of the stop
    pub date: NaiveDate,
    /// Arrival time, 12:00 when the user left the field blank
    pub time: NaiveTime,
}

/// Errors produced when a destination fails validation.
///
/// All variants are user errors: the add is aborted with no state
/// change and the message is shown as a notice. None are fatal; the
/// user corrects the input and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Destination name is empty after trimming
    #[error("Please enter a destination")]
    EmptyName,

    /// Date field is empty after trimming
    #[error("Please select a date")]
    EmptyDate,

    /// Date field is present but not a valid calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Date is earlier than today
    #[error("Cannot select a date before today")]
    DateInPast,

    /// Date is more than one year past today
    #[error("Cannot plan trips more than one year in advance")]
    DateTooFarFuture,

    /// Date falls after the trip's end date
    #[error("Destination date cannot be after trip end date")]
    DateAfterTripEnd,

    /// Time field is present but not a valid HH:MM time
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
}

/// Returns the time stored when the user leaves the time field blank.
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00 is a valid time")
}

/// Returns the latest date a destination may be planned for: one
/// calendar year past `today`. The boundary date itself is accepted.
pub fn max_planning_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX)
}

/// The ordered collection of all destinations for the current session.
///
/// Invariant: the sequence is always sorted ascending by `(date, time)`.
/// The collection starts empty, grows by append + re-sort, shrinks by
/// index removal, and is never persisted.
#[derive(Debug, Default)]
pub struct Itinerary {
    stops: Vec<Destination>,
}

impl Itinerary {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Returns the stops in their sorted order.
    pub fn stops(&self) -> &[Destination] {
        &self.stops
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if no stops have been added.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Validates and adds a destination from raw field input.
    ///
    /// Checks run in a fixed order and the first failure wins: name
    /// present, date present, date well-formed, date not before
    /// `today`, date at most one year ahead, date not after `trip_end`
    /// (when set, the end date itself is allowed). A blank time stores
    /// 12:00. On success the stop is appended and the whole sequence
    /// re-sorted by `(date, time)`.
    ///
    /// `today` is passed in rather than read from the clock so that
    /// validation is a pure function of its arguments.
    pub fn add(
        &mut self,
        name: &str,
        date: &str,
        time: &str,
        trip_end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let date = date.trim();
        if date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        let date: NaiveDate = date
            .parse()
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;

        if date < today {
            return Err(ValidationError::DateInPast);
        }
        if date > max_planning_date(today) {
            return Err(ValidationError::DateTooFarFuture);
        }
        if let Some(end) = trip_end {
            if date > end {
                return Err(ValidationError::DateAfterTripEnd);
            }
        }

        let time = time.trim();
        let time = if time.is_empty() {
            default_time()
        } else {
            NaiveTime::parse_from_str(time, "%H:%M")
                .map_err(|_| ValidationError::InvalidTime(time.to_string()))?
        };

        self.stops.push(Destination {
            name: name.to_string(),
            date,
            time,
        });
        self.stops.sort_by_key(|stop| (stop.date, stop.time));
        Ok(())
    }

    /// Removes the stop at `index`, shifting later stops down.
    ///
    /// Out-of-range indices are a silent no-op: the UI only ever hands
    /// back indices it rendered.
    pub fn remove(&mut self, index: usize) {
        if index < self.stops.len() {
            self.stops.remove(index);
        }
    }
}
