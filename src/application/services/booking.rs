//! Booking service: the PENDING -> {CONFIRMED, REFUSED} state machine,
//! coordinating slot reservation with the credit ledger and payment state.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use metrics::counter;
use tracing::info;
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus, NewBooking};
use crate::domain::carver::{carve_units, TimeRange};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::retry::{retry_transient, RetryConfig};

/// Service for the booking lifecycle.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    /// Length of one bookable unit.
    unit: Duration,
    retry: RetryConfig,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, unit: Duration) -> Self {
        Self {
            repos,
            unit,
            retry: RetryConfig::default(),
        }
    }

    /// Create a PENDING booking for one carved unit, debiting one credit
    /// from `pack_id`.
    ///
    /// The requested range must match a currently-open unit; losing a race
    /// for it surfaces as `SlotUnavailable` and the caller should refresh
    /// the calendar. The slot check-and-insert and the credit debit run in
    /// one storage transaction, so no partial state (held slot without a
    /// booking row, debited credit without a booking) is ever observable.
    pub async fn create_booking(
        &self,
        client_id: &str,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        pack_id: Uuid,
        member_notes: Option<String>,
    ) -> DomainResult<Booking> {
        let requested = TimeRange::new(start_at, end_at);
        self.verify_open_unit(requested).await?;

        let new = NewBooking {
            client_id: client_id.to_string(),
            pack_id,
            start_at,
            end_at,
            member_notes,
        };

        let result = retry_transient(
            self.retry.clone(),
            "create_booking",
            DomainError::is_transient,
            || self.repos.bookings().create_pending(new.clone()),
        )
        .await;

        match &result {
            Ok(booking) => {
                counter!("bookings_created_total").increment(1);
                info!(
                    "Booking {} created for {}: {} - {}",
                    booking.id, booking.client_id, booking.start_at, booking.end_at
                );
            }
            Err(DomainError::SlotUnavailable) => {
                counter!("booking_conflicts_total").increment(1);
            }
            Err(_) => {}
        }
        result
    }

    /// PENDING -> CONFIRMED. No ledger or payment change.
    pub async fn confirm_booking(&self, id: Uuid) -> DomainResult<Booking> {
        let booking = self.repos.bookings().confirm(id).await?;
        info!("Booking {} confirmed", booking.id);
        Ok(booking)
    }

    /// PENDING -> REFUSED: releases the pack credit and marks a linked
    /// PAID payment REFUNDED. The refund request to the external gateway
    /// is emitted by the calling layer.
    pub async fn refuse_booking(
        &self,
        id: Uuid,
        coach_notes: Option<String>,
    ) -> DomainResult<Booking> {
        let booking = retry_transient(
            self.retry.clone(),
            "refuse_booking",
            DomainError::is_transient,
            || self.repos.bookings().refuse(id, coach_notes.clone()),
        )
        .await?;

        counter!("bookings_refused_total").increment(1);
        info!("Booking {} refused, credit released", booking.id);
        Ok(booking)
    }

    pub async fn get_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))
    }

    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        pack_id: Option<Uuid>,
    ) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_all(status, pack_id).await
    }

    /// Recompute carved availability around the requested range and check
    /// the range is one currently-open unit. The storage-level guard in
    /// `create_pending` closes the remaining race window.
    async fn verify_open_unit(&self, requested: TimeRange) -> DomainResult<()> {
        if requested.start_at < Utc::now() {
            return Err(DomainError::SlotUnavailable);
        }

        let slots = self
            .repos
            .slots()
            .find_in_range(requested.start_at, requested.end_at)
            .await?;
        let windows: Vec<TimeRange> = slots.iter().map(|s| s.range()).collect();
        let booked = self
            .repos
            .bookings()
            .find_blocking_in_range(requested.start_at, requested.end_at)
            .await?;

        if !carve_units(&windows, &booked, self.unit).contains(&requested) {
            return Err(DomainError::SlotUnavailable);
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_db, test_repos};
    use crate::domain::pack::{MemberPack, PackStatus};

    struct Fixture {
        repos: Arc<dyn RepositoryProvider>,
        service: BookingService,
        slot_start: DateTime<Utc>,
    }

    /// One open slot tomorrow 09:00-12:00 (three hourly units).
    async fn fixture() -> Fixture {
        let repos = test_repos(test_db().await);
        let service = BookingService::new(Arc::clone(&repos), Duration::hours(1));

        let tomorrow = (Utc::now() + Duration::days(1)).date_naive();
        let slot_start = tomorrow.and_hms_opt(9, 0, 0).unwrap().and_utc();
        let slot = crate::domain::slot::AvailabilitySlot::new(
            slot_start,
            slot_start + Duration::hours(3),
            crate::domain::slot::SlotSource::Manual,
        )
        .unwrap();
        repos.slots().insert_if_absent(slot).await.unwrap();

        Fixture {
            repos,
            service,
            slot_start,
        }
    }

    async fn make_pack(f: &Fixture, total: Option<i32>) -> Uuid {
        let pack = MemberPack::new("client-1", total);
        let id = pack.id;
        f.repos.packs().save(pack).await.unwrap();
        id
    }

    #[tokio::test]
    async fn booking_holds_slot_and_credit() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;

        let booking = f
            .service
            .create_booking(
                "client-1",
                f.slot_start,
                f.slot_start + Duration::hours(1),
                pack_id,
                Some("first session".into()),
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 4);
    }

    #[tokio::test]
    async fn unaligned_range_is_unavailable() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;

        // 9:30-10:30 is not a carved unit of a 9:00-12:00 window.
        let result = f
            .service
            .create_booking(
                "client-1",
                f.slot_start + Duration::minutes(30),
                f.slot_start + Duration::minutes(90),
                pack_id,
                None,
            )
            .await;
        assert!(matches!(result, Err(DomainError::SlotUnavailable)));
    }

    #[tokio::test]
    async fn double_booking_same_unit_fails() {
        let f = fixture().await;
        let pack_a = make_pack(&f, Some(5)).await;
        let pack_b = make_pack(&f, Some(5)).await;
        let unit_end = f.slot_start + Duration::hours(1);

        let (first, second) = tokio::join!(
            f.service
                .create_booking("client-1", f.slot_start, unit_end, pack_a, None),
            f.service
                .create_booking("client-2", f.slot_start, unit_end, pack_b, None),
        );

        let outcomes = [first.is_ok(), second.is_ok()];
        assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
        for result in [first, second] {
            if let Err(err) = result {
                assert!(matches!(err, DomainError::SlotUnavailable));
            }
        }
    }

    #[tokio::test]
    async fn insufficient_credit_leaves_slot_open() {
        let f = fixture().await;
        let pack = MemberPack {
            status: PackStatus::Paused,
            ..MemberPack::new("client-1", Some(3))
        };
        let pack_id = pack.id;
        f.repos.packs().save(pack).await.unwrap();
        let unit_end = f.slot_start + Duration::hours(1);

        let result = f
            .service
            .create_booking("client-1", f.slot_start, unit_end, pack_id, None)
            .await;
        assert!(matches!(result, Err(DomainError::InsufficientCredit(_))));

        // No booking row was kept; the unit books fine with a good pack.
        let good_pack = make_pack(&f, Some(1)).await;
        f.service
            .create_booking("client-1", f.slot_start, unit_end, good_pack, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn one_credit_pack_scenario() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(1)).await;

        let booking = f
            .service
            .create_booking(
                "client-1",
                f.slot_start,
                f.slot_start + Duration::hours(1),
                pack_id,
                None,
            )
            .await
            .unwrap();

        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 0);
        assert_eq!(pack.status, PackStatus::Used);

        // Any other unit with the drained pack is refused by the ledger.
        let result = f
            .service
            .create_booking(
                "client-1",
                f.slot_start + Duration::hours(1),
                f.slot_start + Duration::hours(2),
                pack_id,
                None,
            )
            .await;
        assert!(matches!(result, Err(DomainError::InsufficientCredit(_))));

        // Refusal restores the credit and re-activates the pack.
        f.service.refuse_booking(booking.id, None).await.unwrap();
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 1);
        assert_eq!(pack.status, PackStatus::Active);
    }

    #[tokio::test]
    async fn refusal_frees_the_unit() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;
        let unit_end = f.slot_start + Duration::hours(1);

        let booking = f
            .service
            .create_booking("client-1", f.slot_start, unit_end, pack_id, None)
            .await
            .unwrap();

        // Held while PENDING.
        let retry = f
            .service
            .create_booking("client-2", f.slot_start, unit_end, pack_id, None)
            .await;
        assert!(matches!(retry, Err(DomainError::SlotUnavailable)));

        f.service
            .refuse_booking(booking.id, Some("schedule clash".into()))
            .await
            .unwrap();

        // The exact same range books again.
        f.service
            .create_booking("client-2", f.slot_start, unit_end, pack_id, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn confirmed_is_terminal() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;

        let booking = f
            .service
            .create_booking(
                "client-1",
                f.slot_start,
                f.slot_start + Duration::hours(1),
                pack_id,
                None,
            )
            .await
            .unwrap();

        let confirmed = f.service.confirm_booking(booking.id).await.unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert!(confirmed.confirmed_at.is_some());

        let result = f.service.refuse_booking(booking.id, None).await;
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));

        // Ledger untouched by the rejected refusal.
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 4);

        // And re-confirming is equally invalid.
        let result = f.service.confirm_booking(booking.id).await;
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn credit_conservation_across_creates_and_refusals() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(10)).await;

        let mut bookings = Vec::new();
        for hour in 0..3 {
            let start = f.slot_start + Duration::hours(hour);
            bookings.push(
                f.service
                    .create_booking("client-1", start, start + Duration::hours(1), pack_id, None)
                    .await
                    .unwrap(),
            );
        }

        f.service.refuse_booking(bookings[0].id, None).await.unwrap();
        f.service.refuse_booking(bookings[2].id, None).await.unwrap();

        // 10 - 3 + 2
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 9);
    }

    #[tokio::test]
    async fn unlimited_pack_never_decrements() {
        let f = fixture().await;
        let pack_id = make_pack(&f, None).await;

        for hour in 0..3 {
            let start = f.slot_start + Duration::hours(hour);
            f.service
                .create_booking("client-1", start, start + Duration::hours(1), pack_id, None)
                .await
                .unwrap();
        }

        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.status, PackStatus::Active);
        assert_eq!(pack.credits_remaining, 0);
    }

    #[tokio::test]
    async fn refusal_refunds_linked_paid_payment() {
        use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};

        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;

        let booking = f
            .service
            .create_booking(
                "client-1",
                f.slot_start,
                f.slot_start + Duration::hours(1),
                pack_id,
                None,
            )
            .await
            .unwrap();

        let payment = Payment::new(4500, "EUR", PaymentMethod::ExternalGateway, Some(booking.id));
        let payment_id = payment.id;
        f.repos.payments().save(payment).await.unwrap();
        f.repos
            .bookings()
            .attach_payment(booking.id, payment_id)
            .await
            .unwrap();
        f.repos
            .payments()
            .update_status(payment_id, PaymentStatus::Paid)
            .await
            .unwrap();

        f.service.refuse_booking(booking.id, None).await.unwrap();

        let refunded = f
            .repos
            .payments()
            .find_by_id(payment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(refunded.status, PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn deleted_slot_blocks_pending_insert() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(5)).await;

        // The slot vanishes after the open-unit check would have passed;
        // the write-level guard must still refuse the insert.
        let slots = f.repos.slots().find_all().await.unwrap();
        f.repos.slots().delete(slots[0].id).await.unwrap();

        let new = NewBooking {
            client_id: "client-1".into(),
            pack_id,
            start_at: f.slot_start,
            end_at: f.slot_start + Duration::hours(1),
            member_notes: None,
        };
        let result = f.repos.bookings().create_pending(new).await;
        assert!(matches!(result, Err(DomainError::SlotUnavailable)));

        // Nothing landed and no credit was taken.
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 5);
    }

    #[tokio::test]
    async fn refusing_refused_booking_is_invalid_and_releases_once() {
        let f = fixture().await;
        let pack_id = make_pack(&f, Some(2)).await;

        let booking = f
            .service
            .create_booking(
                "client-1",
                f.slot_start,
                f.slot_start + Duration::hours(1),
                pack_id,
                None,
            )
            .await
            .unwrap();

        f.service.refuse_booking(booking.id, None).await.unwrap();
        let result = f.service.refuse_booking(booking.id, None).await;
        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));

        // No double release past the initial balance.
        let pack = f.repos.packs().find_by_id(pack_id).await.unwrap().unwrap();
        assert_eq!(pack.credits_remaining, 2);
    }
}
