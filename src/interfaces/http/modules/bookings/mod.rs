//! Booking module — the PENDING/CONFIRMED/REFUSED lifecycle

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
