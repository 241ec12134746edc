//! deserializers for dates found in schedule and emissions files, which
//! (should) use yyyy-mm-dd format.
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer};

pub const SCHEDULE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    chrono::NaiveDate::parse_from_str(&date_str, SCHEDULE_DATE_FORMAT)
        .map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
}
