use crate::app::AppError;
use crate::model::estimate::SpeedTable;
use meetpoint_flights::connection::ConnectionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// optional TOML tuning file. omitted sections fall back to the built-in
/// defaults, so an empty file is a valid configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct MeetpointConfig {
    pub speeds: SpeedTable,
    pub connection: ConnectionConfig,
}

impl MeetpointConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MeetpointConfig, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
