//! Availability slot domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::carver::TimeRange;
use crate::domain::{DomainError, DomainResult};

/// How a slot came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// Generated by expanding a recurring rule.
    Expanded,
    /// Entered by the provider directly.
    Manual,
}

impl SlotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "EXPANDED",
            Self::Manual => "MANUAL",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "EXPANDED" => Self::Expanded,
            _ => Self::Manual,
        }
    }
}

/// Published open availability window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub source: SlotSource,
    pub created_at: DateTime<Utc>,
}

impl AvailabilitySlot {
    pub fn new(
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        source: SlotSource,
    ) -> DomainResult<Self> {
        if start_at >= end_at {
            return Err(DomainError::InvalidWindow(format!(
                "slot start {} must be before end {}",
                start_at, end_at
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            start_at,
            end_at,
            source,
            created_at: Utc::now(),
        })
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_at, self.end_at)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn inverted_window_is_rejected() {
        let start = Utc.with_ymd_and_hms(2026, 9, 7, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 9, 7, 9, 0, 0).unwrap();
        assert!(AvailabilitySlot::new(start, end, SlotSource::Manual).is_err());
        assert!(AvailabilitySlot::new(start, start, SlotSource::Manual).is_err());
    }

    #[test]
    fn source_round_trips_through_storage_string() {
        assert_eq!(
            SlotSource::from_str(SlotSource::Expanded.as_str()),
            SlotSource::Expanded
        );
        assert_eq!(
            SlotSource::from_str(SlotSource::Manual.as_str()),
            SlotSource::Manual
        );
    }
}
