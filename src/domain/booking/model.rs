//! Booking domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::carver::TimeRange;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Created, slot and credit held, awaiting provider decision.
    Pending,
    /// Accepted by the provider. Terminal.
    Confirmed,
    /// Declined by the provider; credit released. Terminal.
    Refused,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Refused => "REFUSED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "CONFIRMED" => Self::Confirmed,
            "REFUSED" => Self::Refused,
            // Unknown rows keep blocking their range.
            _ => Self::Pending,
        }
    }

    /// Strict parse for user-supplied filter strings. Unlike `from_str`,
    /// an unrecognized value is `None` rather than a blocking default.
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "REFUSED" => Some(Self::Refused),
            _ => None,
        }
    }

    /// PENDING and CONFIRMED bookings block their range; REFUSED does not.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Refused)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client's claim on one carved unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub client_id: String,
    pub pack_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub member_notes: Option<String>,
    pub coach_notes: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub payment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_at, self.end_at)
    }
}

/// Input for creating a PENDING booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub client_id: String,
    pub pack_id: Uuid,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub member_notes: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_and_confirmed_block_their_range() {
        assert!(BookingStatus::Pending.blocks_slot());
        assert!(BookingStatus::Confirmed.blocks_slot());
        assert!(!BookingStatus::Refused.blocks_slot());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(BookingStatus::Confirmed.is_terminal());
        assert!(BookingStatus::Refused.is_terminal());
    }

    #[test]
    fn unknown_status_string_stays_blocking() {
        assert_eq!(BookingStatus::from_str("CANCELLED"), BookingStatus::Pending);
    }

    #[test]
    fn strict_parse_rejects_unknown_strings() {
        assert_eq!(
            BookingStatus::try_from_str("CONFIRMED"),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(BookingStatus::try_from_str("CANCELLED"), None);
        assert_eq!(BookingStatus::try_from_str("pending"), None);
    }
}
