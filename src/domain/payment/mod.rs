//! Payment aggregate
//!
//! Local record of the payment lifecycle, correlated to a booking. The
//! external gateway executes the actual charge/refund; this engine only
//! keeps the state in sync.

pub mod model;
pub mod repository;

pub use model::{Payment, PaymentMethod, PaymentStatus};
pub use repository::PaymentRepository;
