mod engine;
mod optimize_error;
mod request;
mod response;
mod stage;

pub use engine::Optimizer;
pub use optimize_error::OptimizeError;
pub use request::{EventDuration, OptimizeRequest, WindowSpec};
pub use response::{ErrorResponse, EventDates, FilterResponse, OptimizeResponse};
pub use stage::OptimizeStage;
