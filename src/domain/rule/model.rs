//! Availability rule domain entity

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::carver::TimeRange;
use crate::domain::{DomainError, DomainResult};

/// Minutes in a day, exclusive upper bound for rule windows.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Recurring weekly availability window.
///
/// `weekday` is 0–6 with 0 = Sunday. `start_minutes`/`end_minutes` are
/// minutes since midnight; the window is half-open. Rules for the same
/// weekday may overlap; the expander dedupes the generated slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRule {
    pub id: Uuid,
    pub weekday: u8,
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AvailabilityRule {
    pub fn new(weekday: u8, start_minutes: u16, end_minutes: u16) -> DomainResult<Self> {
        validate_window(weekday, start_minutes, end_minutes)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            weekday,
            start_minutes,
            end_minutes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the window, re-validating it.
    pub fn reschedule(
        &mut self,
        weekday: u8,
        start_minutes: u16,
        end_minutes: u16,
    ) -> DomainResult<()> {
        validate_window(weekday, start_minutes, end_minutes)?;
        self.weekday = weekday;
        self.start_minutes = start_minutes;
        self.end_minutes = end_minutes;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether this rule fires on the given UTC calendar date.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or(u8::MAX) == self.weekday
    }

    /// The concrete window this rule produces on `date`, as UTC instants.
    pub fn window_on(&self, date: NaiveDate) -> TimeRange {
        let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
        TimeRange::new(
            midnight + Duration::minutes(i64::from(self.start_minutes)),
            midnight + Duration::minutes(i64::from(self.end_minutes)),
        )
    }
}

fn validate_window(weekday: u8, start_minutes: u16, end_minutes: u16) -> DomainResult<()> {
    if weekday > 6 {
        return Err(DomainError::InvalidWindow(format!(
            "weekday must be 0-6, got {}",
            weekday
        )));
    }
    if start_minutes >= MINUTES_PER_DAY || end_minutes >= MINUTES_PER_DAY {
        return Err(DomainError::InvalidWindow(format!(
            "minutes must be within 0-1439, got {}-{}",
            start_minutes, end_minutes
        )));
    }
    if start_minutes >= end_minutes {
        return Err(DomainError::InvalidWindow(format!(
            "window start {} must be before end {}",
            start_minutes, end_minutes
        )));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn valid_rule_is_created() {
        let rule = AvailabilityRule::new(1, 540, 720).unwrap();
        assert_eq!(rule.weekday, 1);
        assert_eq!(rule.start_minutes, 540);
        assert_eq!(rule.end_minutes, 720);
    }

    #[test]
    fn start_after_end_is_rejected() {
        assert!(matches!(
            AvailabilityRule::new(1, 720, 540),
            Err(DomainError::InvalidWindow(_))
        ));
        assert!(matches!(
            AvailabilityRule::new(1, 540, 540),
            Err(DomainError::InvalidWindow(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            AvailabilityRule::new(7, 540, 720),
            Err(DomainError::InvalidWindow(_))
        ));
        assert!(matches!(
            AvailabilityRule::new(1, 540, 1440),
            Err(DomainError::InvalidWindow(_))
        ));
    }

    #[test]
    fn monday_rule_matches_only_mondays() {
        // 2026-09-07 is a Monday.
        let rule = AvailabilityRule::new(1, 540, 720).unwrap();
        assert!(rule.matches_date(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()));
        assert!(!rule.matches_date(NaiveDate::from_ymd_opt(2026, 9, 8).unwrap()));
    }

    #[test]
    fn window_on_produces_utc_instants() {
        let rule = AvailabilityRule::new(1, 540, 720).unwrap();
        let window = rule.window_on(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap());
        assert_eq!(window.start_at, Utc.with_ymd_and_hms(2026, 9, 7, 9, 0, 0).unwrap());
        assert_eq!(window.end_at, Utc.with_ymd_and_hms(2026, 9, 7, 12, 0, 0).unwrap());
    }

    #[test]
    fn reschedule_revalidates() {
        let mut rule = AvailabilityRule::new(1, 540, 720).unwrap();
        assert!(rule.reschedule(2, 600, 660).is_ok());
        assert_eq!(rule.weekday, 2);
        assert!(rule.reschedule(2, 660, 600).is_err());
    }
}
