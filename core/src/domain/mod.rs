pub mod card;
pub mod common;
pub mod connection;
pub mod document;
pub mod health;
pub mod listing;
pub mod organization;
pub mod user;
