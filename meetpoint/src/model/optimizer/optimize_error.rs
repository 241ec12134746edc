/// unrecoverable request failures. a run either completes with a winner or
/// surfaces exactly one of these; a winner is never emitted alongside an
/// error. recoverable conditions (empty geographic filter during optimize,
/// unavailable schedule data, missing estimates) are handled in-run and do
/// not appear here.
#[derive(thiserror::Error, Debug)]
pub enum OptimizeError {
    #[error("No attendees provided")]
    NoAttendeesError,
    #[error("Invalid availability window: {0}")]
    InvalidWindowError(String),
    #[error("Invalid weights: {0}")]
    InvalidWeightError(String),
    #[error("Could not locate attendee city: {0}")]
    UnresolvedCityError(String),
    #[error("No candidate cities found within polygon")]
    EmptyCandidateSetError,
    #[error("No candidate cities available to rank")]
    NoCandidatesError,
}
