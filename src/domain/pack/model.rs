//! Member pack domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pack status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackStatus {
    /// Credits can be reserved.
    Active,
    /// Finite pack drained to zero credits.
    Used,
    /// Suspended by the provider; no reservations until resumed.
    Paused,
}

impl PackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Used => "USED",
            Self::Paused => "PAUSED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "ACTIVE" => Self::Active,
            "USED" => Self::Used,
            // Unknown rows stay unreservable.
            _ => Self::Paused,
        }
    }
}

impl std::fmt::Display for PackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Prepaid credit pack.
///
/// `total_credits == None` means unlimited: reservations never decrement
/// and the pack never flips to USED.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPack {
    pub id: Uuid,
    pub client_id: String,
    pub total_credits: Option<i32>,
    pub credits_remaining: i32,
    pub status: PackStatus,
    pub activated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl MemberPack {
    pub fn new(client_id: impl Into<String>, total_credits: Option<i32>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id: client_id.into(),
            total_credits,
            credits_remaining: total_credits.unwrap_or(0),
            status: PackStatus::Active,
            activated_at: now,
            created_at: now,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.total_credits.is_none()
    }

    /// Whether a `reserve_credit` call would currently succeed.
    pub fn can_reserve(&self) -> bool {
        self.status == PackStatus::Active && (self.is_unlimited() || self.credits_remaining > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_pack_starts_full_and_active() {
        let pack = MemberPack::new("client-1", Some(10));
        assert_eq!(pack.credits_remaining, 10);
        assert_eq!(pack.status, PackStatus::Active);
        assert!(pack.can_reserve());
    }

    #[test]
    fn unlimited_pack_always_reservable_while_active() {
        let pack = MemberPack::new("client-1", None);
        assert!(pack.is_unlimited());
        assert!(pack.can_reserve());
    }

    #[test]
    fn drained_or_paused_pack_cannot_reserve() {
        let mut pack = MemberPack::new("client-1", Some(1));
        pack.credits_remaining = 0;
        pack.status = PackStatus::Used;
        assert!(!pack.can_reserve());

        let mut paused = MemberPack::new("client-1", None);
        paused.status = PackStatus::Paused;
        assert!(!paused.can_reserve());
    }

    #[test]
    fn unknown_status_string_maps_to_paused() {
        assert_eq!(PackStatus::from_str("ARCHIVED"), PackStatus::Paused);
    }
}
