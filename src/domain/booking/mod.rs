//! Booking aggregate
//!
//! A client's claim on a specific time range. Lifecycle:
//! `PENDING -> {CONFIRMED, REFUSED}`, both terminal. A PENDING booking
//! already holds its slot and one pack credit.

pub mod model;
pub mod repository;

pub use model::{Booking, BookingStatus, NewBooking};
pub use repository::BookingRepository;
