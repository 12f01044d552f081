pub mod create_connection;
pub mod get_connection;
pub mod get_connections;
