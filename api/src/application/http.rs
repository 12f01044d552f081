pub mod card;
pub mod connection;
pub mod health;
pub mod organization;
pub mod query_extractor;
pub mod server;
pub mod user;
