mod clock;
pub mod date_codec;
mod emissions_row;
pub(crate) mod flight_leg;
mod flights_error;
mod provider;
mod schedule_row;

pub use clock::{wrap_next_day, ClockTime, MINUTES_PER_DAY};
pub use emissions_row::EmissionsRow;
pub use flight_leg::{join_legs, legs_between, FlightLeg};
pub use flights_error::FlightsError;
pub use provider::{
    read_emissions, read_schedule, CsvScheduleSource, ScheduleSource, ScheduleWindow,
};
pub use schedule_row::ScheduleRow;
