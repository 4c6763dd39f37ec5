pub mod ai;
pub mod helpers;
pub mod market;
pub mod purchases;
pub mod watchlist;
