use crate::schedule::{date_codec, ClockTime};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// a row in a daily schedule CSV file representing one scheduled flight leg:
/// a carrier/flight-number pair departing some airport at a local clock time
/// and arriving at another. its unique namespace is defined by carrier and
/// flight number, which is also the join key into the emissions dataset.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScheduleRow {
    /// two-letter operating carrier code.
    #[serde(rename = "CARRIER")]
    pub carrier: String,
    /// flight number within the carrier's namespace. kept as a string since
    /// source files include zero-padded and alphanumeric values.
    #[serde(rename = "FLTNO")]
    pub flight_number: String,
    /// date of operation.
    #[serde(
        rename = "FLIGHT_DATE",
        deserialize_with = "date_codec::deserialize_naive_date"
    )]
    pub flight_date: NaiveDate,
    /// departure airport code.
    #[serde(rename = "DEPAPT")]
    pub departure_airport: String,
    /// arrival airport code.
    #[serde(rename = "ARRAPT")]
    pub arrival_airport: String,
    /// local departure clock time, HHMM-encoded in the source file.
    #[serde(rename = "DEPTIM")]
    pub departure_time: ClockTime,
    /// local arrival clock time, HHMM-encoded in the source file.
    #[serde(rename = "ARRTIM")]
    pub arrival_time: ClockTime,
    /// great-circle route distance in kilometers, when present.
    #[serde(rename = "DISTANCE")]
    pub distance_km: Option<f64>,
}
