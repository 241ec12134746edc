use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use meetpoint_flights::schedule::ScheduleWindow;

/// a parsed availability window: the span of time within which the event
/// (and therefore all attendee travel) must fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AvailabilityWindow {
    /// parses start/end timestamps and validates ordering. accepted input
    /// formats per timestamp: RFC 3339, the minute-precision variant
    /// `YYYY-MM-DDTHH:MMZ`, and a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn parse(start: &str, end: &str) -> Result<AvailabilityWindow, String> {
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;
        if end <= start {
            return Err(format!("window end {end} is not after start {start}"));
        }
        Ok(AvailabilityWindow { start, end })
    }

    pub fn span_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// the date range used for schedule loading.
    pub fn schedule_window(&self) -> ScheduleWindow {
        ScheduleWindow::new(self.start.date_naive(), self.end.date_naive())
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("unrepresentable date '{raw}'"))?
            .and_utc());
    }
    Err(format!("unparseable timestamp '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minute_precision_zulu() {
        let window = AvailabilityWindow::parse("2025-12-10T09:00Z", "2025-12-15T17:00Z").unwrap();
        assert_eq!(window.span_hours(), 5.0 * 24.0 + 8.0);
        let schedule = window.schedule_window();
        assert_eq!(
            schedule.start,
            NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
        );
        assert_eq!(schedule.end, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_and_date_only() {
        assert!(AvailabilityWindow::parse("2025-01-01T09:00:00Z", "2025-01-15T17:00:00+00:00").is_ok());
        assert!(AvailabilityWindow::parse("2025-01-01", "2025-01-02").is_ok());
    }

    #[test]
    fn test_rejects_garbage_and_inverted() {
        assert!(AvailabilityWindow::parse("soon", "later").is_err());
        assert!(AvailabilityWindow::parse("2025-01-02", "2025-01-01").is_err());
        assert!(AvailabilityWindow::parse("2025-01-01", "2025-01-01").is_err());
    }
}
