pub mod handler;

pub use handler::{AddOutcome, Watchlist};
