//! Payment module — local tracker for gateway and cash payments

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
