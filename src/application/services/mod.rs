//! Application services

pub mod availability;
pub mod booking;
pub mod pack;
pub mod payments;

pub use availability::AvailabilityService;
pub use booking::BookingService;
pub use pack::PackService;
pub use payments::PaymentService;
