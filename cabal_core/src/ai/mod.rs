pub mod dto;
pub mod handler;
pub mod prompt;
pub mod tools;

pub use handler::AI;
