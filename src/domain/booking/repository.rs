//! Repository interface for bookings
//!
//! The multi-step transitions (`create_pending`, `refuse`) are specified
//! as single atomic units: either every write lands or none does. The
//! storage implementation closes the check-then-act race at the write
//! level, so two concurrent `create_pending` calls for overlapping ranges
//! cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::carver::TimeRange;
use crate::domain::DomainResult;

use super::{Booking, BookingStatus, NewBooking};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically insert a PENDING booking and reserve one credit from its
    /// pack, in one storage transaction.
    ///
    /// Fails with `SlotUnavailable` if a PENDING or CONFIRMED booking
    /// overlapping the range exists at write time (losing racer included)
    /// or no published slot covers the range at write time, and with
    /// `InsufficientCredit` if the ledger precondition fails; in all
    /// cases no booking row is created and the slot stays open.
    async fn create_pending(&self, new: NewBooking) -> DomainResult<Booking>;

    /// PENDING -> CONFIRMED, setting `confirmed_at`. No ledger or payment
    /// change. Fails with `InvalidTransition` if the booking is not
    /// PENDING.
    async fn confirm(&self, id: Uuid) -> DomainResult<Booking>;

    /// PENDING -> REFUSED, setting `cancelled_at` and `coach_notes`,
    /// releasing the pack credit, and marking a linked PAID payment
    /// REFUNDED, all in one transaction. Fails with `InvalidTransition`
    /// if the booking is not PENDING.
    async fn refuse(&self, id: Uuid, coach_notes: Option<String>) -> DomainResult<Booking>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// Bookings ordered by start, optionally filtered by status and pack.
    async fn find_all(
        &self,
        status: Option<BookingStatus>,
        pack_id: Option<Uuid>,
    ) -> DomainResult<Vec<Booking>>;

    /// Ranges of PENDING/CONFIRMED bookings overlapping `[from, to)`,
    /// for the carver.
    async fn find_blocking_in_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<TimeRange>>;

    /// Link a payment to a booking (0..1 per booking).
    async fn attach_payment(&self, id: Uuid, payment_id: Uuid) -> DomainResult<()>;
}
