//! View models for the three itinerary fragments
//!
//! Building the list, timeline, and route views is a pure function of
//! the itinerary plus externally supplied trip metadata. The output is
//! structured data rather than rendered text so the fragments can be
//! asserted on directly; the ui module turns them into widgets.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::itinerary::Itinerary;
use crate::trip::TripDetails;

/// Empty-state message for the list view.
pub const NO_DESTINATIONS_MESSAGE: &str = "No destinations added yet";

/// Empty-state message for the route view.
pub const EMPTY_ROUTE_MESSAGE: &str = "Add destinations to see route visualization";

/// One stop as shown in the list and timeline views.
///
/// `index` is the stop's position in the sorted sequence and keys
/// removal; the displayed position is `index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopEntry {
    pub index: usize,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// The list fragment: trip header plus one entry per destination.
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    /// Trip name, already defaulted to the placeholder when blank
    pub trip_name: String,
    /// Trip start date, shown as "From:" only when present
    pub start_date: Option<NaiveDate>,
    /// Trip end date, shown as "To:" only when present
    pub end_date: Option<NaiveDate>,
    /// When this view was generated
    pub generated_at: DateTime<Local>,
    pub entries: Vec<StopEntry>,
}

/// The timeline fragment: one stop block per destination.
///
/// An empty itinerary renders nothing here at all. The list view gets
/// an empty-state message and the timeline does not; that asymmetry is
/// deliberate.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    pub stops: Vec<StopEntry>,
}

/// One element of the schematic route: a numbered point or the
/// connector drawn between two consecutive points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RouteSegment {
    Point { position: usize, name: String },
    Connector,
}

/// The route fragment: points separated by connectors, none after the
/// last point. Empty itineraries carry the empty-state message instead.
#[derive(Debug, Clone, Serialize)]
pub struct RouteView {
    pub segments: Vec<RouteSegment>,
}

/// All three fragments, regenerated together after every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryViews {
    pub list: ListView,
    pub timeline: TimelineView,
    pub route: RouteView,
}

/// Builds all three view fragments from the current itinerary and trip
/// metadata.
///
/// `generated_at` is passed in by the caller (the UI uses the wall
/// clock) so the output is fully determined by the arguments.
pub fn build_views(
    itinerary: &Itinerary,
    trip: &TripDetails,
    generated_at: DateTime<Local>,
) -> ItineraryViews {
    let entries: Vec<StopEntry> = itinerary
        .stops()
        .iter()
        .enumerate()
        .map(|(index, stop)| StopEntry {
            index,
            name: stop.name.clone(),
            date: stop.date,
            time: stop.time,
        })
        .collect();

    let mut segments = Vec::with_capacity(entries.len().saturating_mul(2));
    for entry in &entries {
        if !segments.is_empty() {
            segments.push(RouteSegment::Connector);
        }
        segments.push(RouteSegment::Point {
            position: entry.index + 1,
            name: entry.name.clone(),
        });
    }

    ItineraryViews {
        list: ListView {
            trip_name: trip.display_name().to_string(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            generated_at,
            entries: entries.clone(),
        },
        timeline: TimelineView {
            stops: entries,
        },
        route: RouteView { segments },
    }
}

/// The three top-level views a user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Timeline,
    RouteMap,
}

impl View {
    /// Returns a slice containing all view variants in display order.
    pub fn all() -> &'static [View] {
        &[View::List, View::Timeline, View::RouteMap]
    }

    /// Returns a human-readable display label for the view.
    pub fn label(&self) -> &'static str {
        match self {
            View::List => "Itinerary",
            View::Timeline => "Timeline",
            View::RouteMap => "Route",
        }
    }

    /// Parses user input into a View.
    ///
    /// Matching is case-insensitive and supports aliases:
    /// - "list" | "itinerary" -> List
    /// - "timeline" | "time" -> Timeline
    /// - "route" | "map" -> RouteMap
    ///
    /// Returns `None` if the input doesn't match any view.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<View> {
        match s.to_lowercase().trim() {
            "list" | "itinerary" => Some(View::List),
            "timeline" | "time" => Some(View::Timeline),
            "route" | "map" => Some(View::RouteMap),
            _ => None,
        }
    }
}
