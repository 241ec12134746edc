use crate::schedule::FlightsError;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

pub const MINUTES_PER_DAY: i64 = 1440;

/// a local wall-clock time stored as minutes since midnight. schedule files
/// encode these as HHMM integers ("0930", "930", "1745"); all derived
/// arithmetic (journey time, connection wait) happens in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// builds a clock time from an HHMM-encoded integer.
    pub fn from_hhmm(raw: u32) -> Result<ClockTime, FlightsError> {
        let hours = raw / 100;
        let mins = raw % 100;
        if hours > 23 || mins > 59 {
            return Err(FlightsError::InvalidClockTimeError(raw.to_string()));
        }
        Ok(ClockTime(hours * 60 + mins))
    }

    /// minutes since midnight, widened for signed arithmetic.
    pub fn minutes(&self) -> i64 {
        self.0 as i64
    }
}

/// adds one day to a negative clock-time difference to account for a
/// next-day arrival. single day-wrap only; values are not reduced modulo
/// a day, so a multi-day span stays as-is.
pub fn wrap_next_day(delta_minutes: i64) -> i64 {
    if delta_minutes < 0 {
        delta_minutes + MINUTES_PER_DAY
    } else {
        delta_minutes
    }
}

impl FromStr for ClockTime {
    type Err = FlightsError;

    /// accepts both the HHMM digit form found in schedule files ("0930",
    /// "930") and the "HH:MM" form this type serializes to.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.split_once(':') {
            Some((hours, mins)) => format!("{hours}{mins}"),
            None => trimmed.to_string(),
        };
        let raw = digits
            .parse::<u32>()
            .map_err(|_| FlightsError::InvalidClockTimeError(s.to_string()))?;
        ClockTime::from_hhmm(raw)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: String = String::deserialize(deserializer)?;
        ClockTime::from_str(&raw).map_err(|e| D::Error::custom(format!("{e}")))
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
