//! Availability service: rule CRUD, rule expansion, open-slot listing.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::carver::{carve_units, TimeRange};
use crate::domain::rule::AvailabilityRule;
use crate::domain::slot::{AvailabilitySlot, SlotSource};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for publishing availability.
pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
    /// Length of one bookable unit.
    unit: Duration,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, unit: Duration) -> Self {
        Self { repos, unit }
    }

    // ── Rules ──────────────────────────────────────────────────

    pub async fn create_rule(
        &self,
        weekday: u8,
        start_minutes: u16,
        end_minutes: u16,
    ) -> DomainResult<AvailabilityRule> {
        let rule = AvailabilityRule::new(weekday, start_minutes, end_minutes)?;
        self.repos.rules().save(rule.clone()).await?;
        info!(
            "Created rule {}: weekday {} {}-{}",
            rule.id, rule.weekday, rule.start_minutes, rule.end_minutes
        );
        Ok(rule)
    }

    pub async fn update_rule(
        &self,
        id: Uuid,
        weekday: u8,
        start_minutes: u16,
        end_minutes: u16,
    ) -> DomainResult<AvailabilityRule> {
        let mut rule = self
            .repos
            .rules()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("AvailabilityRule", "id", id))?;
        rule.reschedule(weekday, start_minutes, end_minutes)?;
        self.repos.rules().update(rule.clone()).await?;
        Ok(rule)
    }

    /// Deleting a rule has no retroactive effect on already-expanded
    /// slots; expansion is a snapshot, not a live view.
    pub async fn delete_rule(&self, id: Uuid) -> DomainResult<()> {
        self.repos.rules().delete(id).await
    }

    pub async fn list_rules(&self) -> DomainResult<Vec<AvailabilityRule>> {
        self.repos.rules().find_all().await
    }

    // ── Expansion ──────────────────────────────────────────────

    /// Expand every rule into concrete slots over `[today, today +
    /// days_ahead]`. Windows already represented by a slot with the exact
    /// same range are skipped, so re-running on any cadence is safe and a
    /// second immediate run creates nothing. Windows fully in the past
    /// are skipped. Returns the number of slots created.
    pub async fn apply_rules(&self, days_ahead: u32) -> DomainResult<u64> {
        let rules = self.repos.rules().find_all().await?;
        let now = Utc::now();
        let today = now.date_naive();

        let mut created = 0u64;
        for offset in 0..=i64::from(days_ahead) {
            let date = today + Duration::days(offset);
            for rule in rules.iter().filter(|r| r.matches_date(date)) {
                let window = rule.window_on(date);
                if window.end_at <= now {
                    continue;
                }
                let slot =
                    AvailabilitySlot::new(window.start_at, window.end_at, SlotSource::Expanded)?;
                if self.repos.slots().insert_if_absent(slot).await? {
                    created += 1;
                }
            }
        }

        info!("Rule expansion over {} days created {} slots", days_ahead, created);
        Ok(created)
    }

    // ── Slots ──────────────────────────────────────────────────

    pub async fn create_slot(
        &self,
        start_at: chrono::DateTime<Utc>,
        end_at: chrono::DateTime<Utc>,
    ) -> DomainResult<AvailabilitySlot> {
        let slot = AvailabilitySlot::new(start_at, end_at, SlotSource::Manual)?;
        if !self.repos.slots().insert_if_absent(slot.clone()).await? {
            return Err(DomainError::Conflict(format!(
                "slot {} - {}",
                start_at, end_at
            )));
        }
        Ok(slot)
    }

    pub async fn delete_slot(&self, id: Uuid) -> DomainResult<()> {
        self.repos.slots().delete(id).await
    }

    pub async fn list_slots(&self) -> DomainResult<Vec<AvailabilitySlot>> {
        self.repos.slots().find_all().await
    }

    /// Carved units open for booking over the next `range_days` days,
    /// computed at read time from slots minus PENDING/CONFIRMED booking
    /// ranges. Units that have already started are not offered.
    pub async fn list_open_units(&self, range_days: u32) -> DomainResult<Vec<TimeRange>> {
        let from = Utc::now();
        let to = from + Duration::days(i64::from(range_days));

        let slots = self.repos.slots().find_in_range(from, to).await?;
        let windows: Vec<TimeRange> = slots.iter().map(|s| s.range()).collect();
        let booked = self.repos.bookings().find_blocking_in_range(from, to).await?;

        let units = carve_units(&windows, &booked, self.unit)
            .into_iter()
            .filter(|u| u.start_at >= from && u.end_at <= to)
            .collect();
        Ok(units)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{test_db, test_repos};
    use chrono::{Datelike, NaiveDate, TimeZone};

    async fn service() -> AvailabilityService {
        let repos = test_repos(test_db().await);
        AvailabilityService::new(repos, Duration::hours(1))
    }

    /// First calendar date strictly after today with the given weekday
    /// (0 = Sunday).
    fn next_date_with_weekday(weekday: u8) -> NaiveDate {
        let mut date = Utc::now().date_naive() + Duration::days(1);
        while date.weekday().num_days_from_sunday() != u32::from(weekday) {
            date += Duration::days(1);
        }
        date
    }

    #[tokio::test]
    async fn create_rule_rejects_invalid_window() {
        let svc = service().await;
        assert!(matches!(
            svc.create_rule(1, 720, 540).await,
            Err(DomainError::InvalidWindow(_))
        ));
        assert!(matches!(
            svc.create_rule(9, 540, 720).await,
            Err(DomainError::InvalidWindow(_))
        ));
    }

    #[tokio::test]
    async fn expansion_is_idempotent() {
        let svc = service().await;
        svc.create_rule(1, 540, 720).await.unwrap();

        let first = svc.apply_rules(14).await.unwrap();
        assert!(first >= 2, "two weeks should cover at least two Mondays");

        let second = svc.apply_rules(14).await.unwrap();
        assert_eq!(second, 0);

        let slots = svc.list_slots().await.unwrap();
        assert_eq!(slots.len() as u64, first);
    }

    #[tokio::test]
    async fn overlapping_rules_do_not_duplicate_slots() {
        let svc = service().await;
        svc.create_rule(2, 540, 720).await.unwrap();
        svc.create_rule(2, 540, 720).await.unwrap();

        svc.apply_rules(7).await.unwrap();
        let slots = svc.list_slots().await.unwrap();
        let mut windows: Vec<_> = slots.iter().map(|s| (s.start_at, s.end_at)).collect();
        windows.sort();
        windows.dedup();
        assert_eq!(windows.len(), slots.len());
    }

    #[tokio::test]
    async fn monday_rule_carves_three_hourly_units() {
        let svc = service().await;
        svc.create_rule(1, 540, 720).await.unwrap();
        svc.apply_rules(8).await.unwrap();

        let monday = next_date_with_weekday(1);
        let day_start = Utc
            .from_utc_datetime(&monday.and_hms_opt(0, 0, 0).unwrap());

        let units: Vec<_> = svc
            .list_open_units(9)
            .await
            .unwrap()
            .into_iter()
            .filter(|u| u.start_at >= day_start && u.end_at <= day_start + Duration::days(1))
            .collect();

        assert_eq!(units.len(), 3);
        assert_eq!(units[0].start_at, day_start + Duration::hours(9));
        assert_eq!(units[1].start_at, day_start + Duration::hours(10));
        assert_eq!(units[2].start_at, day_start + Duration::hours(11));
        assert_eq!(units[2].end_at, day_start + Duration::hours(12));
    }

    #[tokio::test]
    async fn manual_slot_duplicate_is_conflict() {
        let svc = service().await;
        let start = Utc::now() + Duration::days(1);
        let end = start + Duration::hours(2);

        svc.create_slot(start, end).await.unwrap();
        assert!(matches!(
            svc.create_slot(start, end).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn deleting_rule_keeps_expanded_slots() {
        let svc = service().await;
        let rule = svc.create_rule(3, 600, 660).await.unwrap();
        let created = svc.apply_rules(7).await.unwrap();
        assert!(created >= 1);

        svc.delete_rule(rule.id).await.unwrap();
        assert_eq!(svc.list_slots().await.unwrap().len() as u64, created);
    }
}
