//! Cross-cutting helpers shared by all layers.

pub mod errors;
pub mod retry;
