//! Availability slots module — concrete windows and open units

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
