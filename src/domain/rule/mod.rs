//! AvailabilityRule aggregate
//!
//! Recurring weekly availability window owned by the provider.

pub mod model;
pub mod repository;

pub use model::AvailabilityRule;
pub use repository::RuleRepository;
