//! # Studio Booking
//!
//! Availability and booking ledger engine for a single-provider studio.
//! Weekly rules expand into concrete slots, slots are carved into
//! fixed-length bookable units, and bookings reserve credits from
//! prepaid packs through a PENDING/CONFIRMED/REFUSED lifecycle.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the unit carver and repository traits
//! - **application**: Services implementing the booking, ledger and payment flows
//! - **infrastructure**: SeaORM entities, migrations and repository implementations
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Domain errors and retry helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
