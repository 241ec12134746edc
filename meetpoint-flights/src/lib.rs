pub mod connection;
pub mod schedule;
