mod connection;
mod finder;

pub use connection::Connection;
pub use finder::{find_connections, ConnectionConfig};
