//! Payment domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Charged through the external gateway; status driven by its callback.
    ExternalGateway,
    /// Cash; status driven by explicit provider action.
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalGateway => "EXTERNAL_GATEWAY",
            Self::Cash => "CASH",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "CASH" => Self::Cash,
            _ => Self::ExternalGateway,
        }
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "PENDING" => Self::Pending,
            "PAID" => Self::Paid,
            "REFUNDED" => Self::Refunded,
            _ => Self::Failed,
        }
    }

    /// Allowed forward transitions: `PENDING -> {PAID, FAILED}`,
    /// `PAID -> REFUNDED`. FAILED and REFUNDED are terminal.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Paid)
                | (Self::Pending, Self::Failed)
                | (Self::Paid, Self::Refunded)
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Local payment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Option<Uuid>,
    pub amount_cents: i64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        amount_cents: i64,
        currency: impl Into<String>,
        method: PaymentMethod,
        booking_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            booking_id,
            amount_cents,
            currency: currency.into(),
            method,
            status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_matrix() {
        use PaymentStatus::*;

        assert!(Pending.can_transition_to(Paid));
        assert!(Pending.can_transition_to(Failed));
        assert!(Paid.can_transition_to(Refunded));

        assert!(!Pending.can_transition_to(Refunded));
        assert!(!Paid.can_transition_to(Failed));
        assert!(!Paid.can_transition_to(Pending));
        assert!(!Failed.can_transition_to(Paid));
        assert!(!Refunded.can_transition_to(Paid));
        assert!(!Refunded.can_transition_to(Pending));
    }

    #[test]
    fn new_payment_starts_pending() {
        let payment = Payment::new(4500, "EUR", PaymentMethod::ExternalGateway, None);
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert_eq!(payment.amount_cents, 4500);
    }
}
