//! Member pack module — prepaid credit packs

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
