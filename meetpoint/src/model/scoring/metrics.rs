use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// raw per-candidate travel cost aggregated across all attendees. built
/// fresh per scoring run and never shared across runs; the normalized form
/// is only meaningful relative to the candidate set it was computed with.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CandidateMetrics {
    /// candidate airport code.
    pub code: String,
    /// candidate display name.
    pub city_name: String,
    /// worst-case travel hours across attendees.
    pub max_travel_hours: f64,
    /// total CO2 in tonnes across every attendee's chosen route.
    pub total_co2_tonnes: f64,
    /// travel hours per attendee city name.
    pub attendee_travel_hours: BTreeMap<String, f64>,
}

impl CandidateMetrics {
    /// summary statistics over the per-attendee hours: (average, median,
    /// max, min). all zero when no attendees are recorded.
    pub fn travel_hour_stats(&self) -> (f64, f64, f64, f64) {
        let mut hours: Vec<f64> = self.attendee_travel_hours.values().copied().collect();
        if hours.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        hours.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = hours.len();
        let average = hours.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            hours[n / 2]
        } else {
            (hours[n / 2 - 1] + hours[n / 2]) / 2.0
        };
        (average, median, hours[n - 1], hours[0])
    }
}
