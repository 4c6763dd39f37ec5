pub mod dto;
pub mod handler;

pub use handler::{Market, DEFAULT_INTERVAL_HOURS, DEFAULT_POPULAR_TOKEN_LIMIT};
