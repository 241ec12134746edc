use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// one optimization request as received at the API boundary. attendee maps
/// arrive as arbitrary JSON objects and are converted to typed records
/// here; the core never operates on untyped maps.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OptimizeRequest {
    /// attendee city name to headcount.
    pub attendees: BTreeMap<String, u32>,
    pub availability_window: WindowSpec,
    #[serde(default)]
    pub event_duration: Option<EventDuration>,
    #[serde(default = "default_weight")]
    pub time_weight: f64,
    #[serde(default = "default_weight")]
    pub emissions_weight: f64,
}

/// raw window timestamps; parsed and validated by the optimizer so that a
/// malformed window surfaces as an input error rather than a decode error.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowSpec {
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EventDuration {
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub hours: u32,
}

fn default_weight() -> f64 {
    0.5
}
