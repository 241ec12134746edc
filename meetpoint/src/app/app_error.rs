use crate::model::geocode::GeocodeError;
use crate::model::optimizer::OptimizeError;
use meetpoint_flights::schedule::FlightsError;

/// failures surfaced at the command line boundary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Failure reading file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failure decoding query JSON: {0}")]
    QueryDecodeError(#[from] serde_json::Error),
    #[error("Failure decoding configuration: {0}")]
    ConfigDecodeError(#[from] toml::de::Error),
    #[error("Failure reading city table: {0}")]
    CityTableError(#[from] csv::Error),
    #[error("Failure building geocoder: {0}")]
    GeocoderError(#[from] GeocodeError),
    #[error("Failure reading flight data: {0}")]
    FlightDataError(#[from] FlightsError),
    #[error("{0}")]
    OptimizeFailedError(#[from] OptimizeError),
}
