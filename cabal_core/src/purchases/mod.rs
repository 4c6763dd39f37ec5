pub mod handler;

pub use handler::detect_token_purchases;
