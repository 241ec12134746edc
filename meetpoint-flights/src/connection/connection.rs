use crate::schedule::FlightLeg;
use serde::{Deserialize, Serialize};

/// a single-stop itinerary: two legs sharing a connection airport, valid
/// under the wait-window and emissions bounds they were discovered with.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Connection {
    pub first: FlightLeg,
    pub second: FlightLeg,
    /// sum of both legs' CO2 estimates, in tonnes.
    pub total_co2_tonnes: f64,
    /// first-leg departure to second-leg arrival, in minutes, with a single
    /// day-wrap applied.
    pub journey_minutes: i64,
    /// layover between first-leg arrival and second-leg departure, in minutes.
    pub wait_minutes: i64,
}

impl Connection {
    /// the airport where the traveler changes planes.
    pub fn connection_airport(&self) -> &str {
        &self.first.arrival_airport
    }
}
