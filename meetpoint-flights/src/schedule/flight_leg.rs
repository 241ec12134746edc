use crate::schedule::{wrap_next_day, ClockTime, EmissionsRow, ScheduleRow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a scheduled flight leg joined to its emissions estimate. this is the
/// record the connection finder and the optimizer operate on; rows that
/// failed the schedule-emissions join never become legs.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FlightLeg {
    pub carrier: String,
    pub flight_number: String,
    pub flight_date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub distance_km: Option<f64>,
    pub fuel_burn_tonnes: f64,
    pub co2_tonnes: f64,
}

impl FlightLeg {
    /// scheduled elapsed time in minutes, with a single day-wrap applied
    /// when the arrival clock time precedes the departure clock time.
    pub fn elapsed_minutes(&self) -> i64 {
        wrap_next_day(self.arrival_time.minutes() - self.departure_time.minutes())
    }
}

/// joins schedule rows to emissions rows on (carrier, flight number).
/// inner join semantics: schedule rows without a matching emissions row,
/// and matches without a CO2 estimate, are dropped. leg order follows
/// schedule row order.
pub fn join_legs(schedule: Vec<ScheduleRow>, emissions: &[EmissionsRow]) -> Vec<FlightLeg> {
    let by_flight: HashMap<(&str, &str), &EmissionsRow> = emissions
        .iter()
        .map(|row| ((row.carrier.as_str(), row.flight_number.as_str()), row))
        .collect();

    schedule
        .into_iter()
        .filter_map(|row| {
            let emissions_row = by_flight.get(&(row.carrier.as_str(), row.flight_number.as_str()))?;
            let co2_tonnes = emissions_row.co2_tonnes?;
            let fuel_burn_tonnes = emissions_row.fuel_burn_tonnes.unwrap_or(0.0);
            Some(FlightLeg {
                carrier: row.carrier,
                flight_number: row.flight_number,
                flight_date: row.flight_date,
                departure_airport: row.departure_airport,
                arrival_airport: row.arrival_airport,
                departure_time: row.departure_time,
                arrival_time: row.arrival_time,
                distance_km: row.distance_km,
                fuel_burn_tonnes,
                co2_tonnes,
            })
        })
        .collect()
}

/// all direct legs from `origin` to `destination`, in dataset order.
pub fn legs_between<'a>(
    legs: &'a [FlightLeg],
    origin: &str,
    destination: &str,
) -> Vec<&'a FlightLeg> {
    legs.iter()
        .filter(|leg| leg.departure_airport == origin && leg.arrival_airport == destination)
        .collect()
}
