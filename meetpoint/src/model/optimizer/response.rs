use crate::model::city::City;
use crate::model::coordinate::Coordinate;
use crate::model::optimizer::OptimizeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// successful optimization output. field names are a stable contract with
/// the web/UI layers.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OptimizeResponse {
    /// winning city display name.
    pub event_location: String,
    /// winning city airport code.
    pub event_location_code: String,
    pub event_dates: EventDates,
    /// total CO2 in tonnes across all attendees' routes to the winner.
    pub total_co2: f64,
    pub average_travel_hours: f64,
    pub median_travel_hours: f64,
    pub max_travel_hours: f64,
    pub min_travel_hours: f64,
    /// travel hours per attendee city, for the winner only.
    pub attendee_travel_hours: BTreeMap<String, f64>,
    /// normalized time sub-score of the winner.
    pub time_score: f64,
    /// normalized emissions sub-score of the winner.
    pub emissions_score: f64,
    /// weighted composite the winner was selected on.
    pub composite_score: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventDates {
    pub start: String,
    pub end: String,
    /// window span in hours.
    pub hours: f64,
}

/// geographic-filter output: the pruned candidate set plus the polygon and
/// attendee locations it was derived from.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FilterResponse {
    pub filtered_candidates: BTreeMap<String, City>,
    pub polygon_vertices: Vec<Coordinate>,
    pub attendee_locations: BTreeMap<String, Coordinate>,
    pub total_candidates: usize,
    pub candidates_in_polygon: usize,
}

/// the structured error object every failure surfaces as.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&OptimizeError> for ErrorResponse {
    fn from(e: &OptimizeError) -> ErrorResponse {
        ErrorResponse {
            error: e.to_string(),
        }
    }
}
