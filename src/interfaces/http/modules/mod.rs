pub mod bookings;
pub mod health;
pub mod packs;
pub mod payments;
pub mod rules;
pub mod slots;
