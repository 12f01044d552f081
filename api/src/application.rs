pub mod http;
pub mod listing_middleware;
pub mod logger;
