//! Property-based tests for travel-ledger invariants

use chrono::{DateTime, Duration, TimeZone, Utc};
use chronotest::{TimeOp, TimeValue, TravelLog};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

/// Trip starts spread over roughly a century around the epoch
fn start_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-1_500_000_000i64..1_500_000_000i64).prop_map(|secs| epoch() + Duration::seconds(secs))
}

proptest! {
    /// Resolving the same travel again returns the start shifted by exactly
    /// the paused elapsed duration.
    #[test]
    fn prop_resume_carries_paused_elapsed(
        start in start_instant(),
        elapsed_secs in 0i64..1_000_000,
    ) {
        let mut log = TravelLog::new();
        let resolved = log.resolve(TimeOp::Travel, TimeValue::Timestamp(start)).unwrap();
        prop_assert_eq!(resolved, start);

        log.pause(start + Duration::seconds(elapsed_secs));
        let resumed = log.resolve(TimeOp::Travel, TimeValue::Timestamp(start)).unwrap();
        prop_assert_eq!(resumed, start + Duration::seconds(elapsed_secs));
    }

    /// A different start never inherits elapsed time from the previous trip.
    #[test]
    fn prop_fresh_trip_starts_with_zero_elapsed(
        start in start_instant(),
        other_offset in 1i64..1_000_000,
        elapsed_secs in 1i64..1_000_000,
    ) {
        let other = start + Duration::seconds(other_offset);
        let mut log = TravelLog::new();
        log.resolve(TimeOp::Travel, TimeValue::Timestamp(start)).unwrap();
        log.pause(start + Duration::seconds(elapsed_secs));

        let resolved = log.resolve(TimeOp::Travel, TimeValue::Timestamp(other)).unwrap();
        prop_assert_eq!(resolved, other);
    }

    /// Pausing repeatedly keeps elapsed anchored to the trip baseline, not to
    /// the previous pause.
    #[test]
    fn prop_pause_is_anchored_to_the_baseline(
        start in start_instant(),
        first_secs in 0i64..1_000_000,
        second_secs in 0i64..1_000_000,
    ) {
        let mut log = TravelLog::new();
        log.resolve(TimeOp::Travel, TimeValue::Timestamp(start)).unwrap();
        log.pause(start + Duration::seconds(first_secs));
        log.pause(start + Duration::seconds(second_secs));

        let resumed = log.resolve(TimeOp::Travel, TimeValue::Timestamp(start)).unwrap();
        prop_assert_eq!(resumed, start + Duration::seconds(second_secs));
    }

    /// Representation matters: a date and the timestamp at its midnight are
    /// different trips in both directions.
    #[test]
    fn prop_date_and_timestamp_never_resume_each_other(
        days in -20_000i32..20_000,
        elapsed_secs in 1i64..1_000_000,
    ) {
        let date = epoch().date_naive() + Duration::days(i64::from(days));
        let midnight = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));

        let mut log = TravelLog::new();
        log.resolve(TimeOp::Travel, TimeValue::Date(date)).unwrap();
        log.pause(midnight + Duration::seconds(elapsed_secs));

        let resolved = log.resolve(TimeOp::Travel, TimeValue::Timestamp(midnight)).unwrap();
        prop_assert_eq!(resolved, midnight);
    }
}
