#[derive(thiserror::Error, Debug)]
pub enum FlightsError {
    #[error("Failed to read schedule file {path}: {source}")]
    ScheduleReadError { path: String, source: csv::Error },
    #[error("Failed to read emissions file {path}: {source}")]
    EmissionsReadError { path: String, source: csv::Error },
    #[error("Emissions file not found: {0}")]
    MissingEmissionsFileError(String),
    #[error("Invalid HHMM clock time: {0}")]
    InvalidClockTimeError(String),
}
