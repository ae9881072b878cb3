//! Availability rules module — CRUD + expansion

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
