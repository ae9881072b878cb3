//! Payment service: local payment-state tracking.
//!
//! The gateway (or the provider, for cash) is the source of truth; this
//! service only records transitions and rejects illegal ones.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for payment bookkeeping.
pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record a new PENDING payment, optionally linked to a booking.
    pub async fn create_payment(
        &self,
        amount_cents: i64,
        currency: &str,
        method: PaymentMethod,
        booking_id: Option<Uuid>,
    ) -> DomainResult<Payment> {
        if amount_cents <= 0 {
            return Err(DomainError::Validation(format!(
                "amount_cents must be positive, got {}",
                amount_cents
            )));
        }

        if let Some(booking_id) = booking_id {
            if self.repos.bookings().find_by_id(booking_id).await?.is_none() {
                return Err(DomainError::not_found("Booking", "id", booking_id));
            }
            if self.repos.payments().find_by_booking(booking_id).await?.is_some() {
                return Err(DomainError::Conflict(format!(
                    "booking {} already has a payment",
                    booking_id
                )));
            }
        }

        let payment = Payment::new(amount_cents, currency, method, booking_id);
        self.repos.payments().save(payment.clone()).await?;
        if let Some(booking_id) = booking_id {
            self.repos.bookings().attach_payment(booking_id, payment.id).await?;
        }

        info!(
            "Payment {} created: {} {} ({})",
            payment.id,
            payment.amount_cents,
            payment.currency,
            payment.method.as_str()
        );
        Ok(payment)
    }

    pub async fn get_payment(&self, id: Uuid) -> DomainResult<Payment> {
        self.repos
            .payments()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", "id", id))
    }

    /// PENDING -> PAID. Driven by the gateway callback for gateway
    /// payments, by explicit provider action for cash.
    pub async fn mark_paid(&self, id: Uuid) -> DomainResult<Payment> {
        self.transition(id, PaymentStatus::Paid).await
    }

    /// PENDING -> FAILED. Terminal.
    pub async fn mark_failed(&self, id: Uuid) -> DomainResult<Payment> {
        self.transition(id, PaymentStatus::Failed).await
    }

    /// PAID -> REFUNDED. Terminal.
    pub async fn mark_refunded(&self, id: Uuid) -> DomainResult<Payment> {
        self.transition(id, PaymentStatus::Refunded).await
    }

    async fn transition(&self, id: Uuid, next: PaymentStatus) -> DomainResult<Payment> {
        let payment = self.get_payment(id).await?;
        if !payment.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition(format!(
                "payment {} cannot go {} -> {}",
                id, payment.status, next
            )));
        }
        self.repos.payments().update_status(id, next).await?;
        info!("Payment {} -> {}", id, next);
        self.get_payment(id).await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_db, test_repos};

    async fn service() -> PaymentService {
        PaymentService::new(test_repos(test_db().await))
    }

    #[tokio::test]
    async fn lifecycle_pending_paid_refunded() {
        let svc = service().await;
        let payment = svc
            .create_payment(4500, "EUR", PaymentMethod::Cash, None)
            .await
            .unwrap();
        assert_eq!(payment.status, PaymentStatus::Pending);

        let paid = svc.mark_paid(payment.id).await.unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);

        let refunded = svc.mark_refunded(payment.id).await.unwrap();
        assert_eq!(refunded.status, PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn refund_requires_paid() {
        let svc = service().await;
        let payment = svc
            .create_payment(4500, "EUR", PaymentMethod::ExternalGateway, None)
            .await
            .unwrap();

        assert!(matches!(
            svc.mark_refunded(payment.id).await,
            Err(DomainError::InvalidTransition(_))
        ));
    }

    #[tokio::test]
    async fn failed_is_terminal() {
        let svc = service().await;
        let payment = svc
            .create_payment(4500, "EUR", PaymentMethod::ExternalGateway, None)
            .await
            .unwrap();

        svc.mark_failed(payment.id).await.unwrap();
        assert!(matches!(
            svc.mark_paid(payment.id).await,
            Err(DomainError::InvalidTransition(_))
        ));
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let svc = service().await;
        assert!(matches!(
            svc.create_payment(0, "EUR", PaymentMethod::Cash, None).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn linking_to_missing_booking_fails() {
        let svc = service().await;
        assert!(matches!(
            svc.create_payment(4500, "EUR", PaymentMethod::Cash, Some(Uuid::new_v4()))
                .await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
