//! SeaORM entities
//!
//! Status and source unions are stored as strings; the closed domain
//! enums are restored in the repository layer.

pub mod availability_rule;
pub mod availability_slot;
pub mod booking;
pub mod member_pack;
pub mod payment;
