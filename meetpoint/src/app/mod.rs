mod app_error;
mod config;
mod meetpoint_cli;

pub use app_error::AppError;
pub use config::MeetpointConfig;
pub use meetpoint_cli::{MeetpointCliArguments, MeetpointOperation};
