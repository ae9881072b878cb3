//! Domain layer: entities, status enums, repository traits, and the pure
//! slot carver. No I/O lives here.

pub mod booking;
pub mod carver;
pub mod pack;
pub mod payment;
pub mod rule;
pub mod slot;

pub use booking::{Booking, BookingRepository, BookingStatus, NewBooking};
pub use carver::{carve_units, TimeRange};
pub use pack::{MemberPack, PackRepository, PackStatus};
pub use payment::{Payment, PaymentMethod, PaymentRepository, PaymentStatus};
pub use rule::{AvailabilityRule, RuleRepository};
pub use slot::{AvailabilitySlot, SlotRepository, SlotSource};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let pack = repos.packs().find_by_id(pack_id).await?;
///     let open = repos.slots().find_in_range(from, to).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn rules(&self) -> &dyn RuleRepository;
    fn slots(&self) -> &dyn SlotRepository;
    fn packs(&self) -> &dyn PackRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn payments(&self) -> &dyn PaymentRepository;
}
