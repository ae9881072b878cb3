//! AvailabilitySlot aggregate
//!
//! Concrete dated availability window, expanded from a rule or entered
//! manually. Bookings never mutate slots; overlap is computed at read time.

pub mod model;
pub mod repository;

pub use model::{AvailabilitySlot, SlotSource};
pub use repository::SlotRepository;
