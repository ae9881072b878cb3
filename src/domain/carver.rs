//! Slot carver
//!
//! Splits open availability windows into fixed-length bookable units and
//! removes any unit overlapping a booked range. Pure and re-derived at
//! read time, so confirmed/refused changes show up immediately without an
//! invalidation step.

use chrono::{DateTime, Duration, Utc};

/// Half-open instant range `[start_at, end_at)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRange {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self { start_at, end_at }
    }

    /// Half-open overlap test: a range ending exactly when another begins
    /// is not a conflict.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start_at < other.end_at && other.start_at < self.end_at
    }
}

/// Carve `open_windows` into consecutive `unit`-length ranges, dropping
/// trailing remainders shorter than `unit` and any unit that overlaps a
/// booked range. Output is ordered by start and deduplicated (overlapping
/// open windows may generate the same unit twice).
pub fn carve_units(
    open_windows: &[TimeRange],
    booked: &[TimeRange],
    unit: Duration,
) -> Vec<TimeRange> {
    let mut units = Vec::new();

    for window in open_windows {
        let mut cursor = window.start_at;
        while cursor + unit <= window.end_at {
            let candidate = TimeRange::new(cursor, cursor + unit);
            if !booked.iter().any(|b| candidate.overlaps(b)) {
                units.push(candidate);
            }
            cursor += unit;
        }
    }

    units.sort();
    units.dedup();
    units
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 7, hour, min, 0).unwrap()
    }

    fn range(from: (u32, u32), to: (u32, u32)) -> TimeRange {
        TimeRange::new(at(from.0, from.1), at(to.0, to.1))
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = range((9, 0), (10, 0));
        let b = range((10, 0), (11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_overlap_is_detected() {
        let a = range((9, 0), (10, 30));
        let b = range((10, 0), (11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn three_hour_window_yields_three_hourly_units() {
        let units = carve_units(&[range((9, 0), (12, 0))], &[], Duration::hours(1));
        assert_eq!(
            units,
            vec![
                range((9, 0), (10, 0)),
                range((10, 0), (11, 0)),
                range((11, 0), (12, 0)),
            ]
        );
    }

    #[test]
    fn booked_unit_is_carved_out() {
        let units = carve_units(
            &[range((9, 0), (12, 0))],
            &[range((10, 0), (11, 0))],
            Duration::hours(1),
        );
        assert_eq!(units, vec![range((9, 0), (10, 0)), range((11, 0), (12, 0))]);
    }

    #[test]
    fn trailing_remainder_is_dropped() {
        let units = carve_units(&[range((9, 0), (10, 30))], &[], Duration::hours(1));
        assert_eq!(units, vec![range((9, 0), (10, 0))]);
    }

    #[test]
    fn window_shorter_than_unit_yields_nothing() {
        let units = carve_units(&[range((9, 0), (9, 45))], &[], Duration::hours(1));
        assert!(units.is_empty());
    }

    #[test]
    fn booking_straddling_two_units_blocks_both() {
        let units = carve_units(
            &[range((9, 0), (12, 0))],
            &[range((9, 30), (10, 30))],
            Duration::hours(1),
        );
        assert_eq!(units, vec![range((11, 0), (12, 0))]);
    }

    #[test]
    fn overlapping_windows_do_not_duplicate_units() {
        let units = carve_units(
            &[range((9, 0), (11, 0)), range((10, 0), (12, 0))],
            &[],
            Duration::hours(1),
        );
        assert_eq!(
            units,
            vec![
                range((9, 0), (10, 0)),
                range((10, 0), (11, 0)),
                range((11, 0), (12, 0)),
            ]
        );
    }
}
