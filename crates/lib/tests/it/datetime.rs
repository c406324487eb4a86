//! Date and time integration tests

use chrono::{NaiveDate, NaiveDateTime, Utc};
use genery::{
    Error,
    datetime::{
        DEFAULT_INTERVAL_MS, TimeError, datetime_to_timestamp, human_readable_time,
        make_tz_aware, round_datetime_interval,
    },
};

fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 4, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_timestamp_and_tz_aware_agree() {
    let naive = dt(18, 9, 12);
    let aware = make_tz_aware(naive);

    assert_eq!(aware.timezone(), Utc);
    assert_eq!(datetime_to_timestamp(&naive), aware.timestamp_millis());
    assert_eq!(datetime_to_timestamp(&dt(18, 0, 0)), 1_587_168_000_000);
}

#[test]
fn test_round_interval_short_range() {
    // 100 minutes over 50 bars is closest to the 2 minute interval
    let (interval, start, end) = round_datetime_interval(Some(dt(18, 1, 5)), Some(dt(18, 2, 45)));

    assert_eq!(interval, 120_000);
    assert_eq!(start, Some(datetime_to_timestamp(&dt(18, 1, 4))));
    assert_eq!(end, Some(datetime_to_timestamp(&dt(18, 2, 46))));
}

#[test]
fn test_round_interval_huge_range_uses_largest_interval() {
    let start = dt(1, 0, 0);
    let end = start + chrono::Duration::days(365 * 100);
    let (interval, _, _) = round_datetime_interval(Some(start), Some(end));
    assert_eq!(interval, 31_104_000_000);
}

#[test]
fn test_round_interval_defaults_without_bounds() {
    assert_eq!(round_datetime_interval(None, None), (DEFAULT_INTERVAL_MS, None, None));
}

#[test]
fn test_human_readable_time_units() {
    assert_eq!(human_readable_time(0.1, 3).unwrap(), "instantly");
    assert_eq!(human_readable_time(999.0, 0).unwrap(), "999 ms");
    assert_eq!(human_readable_time(59_000.0, 2).unwrap(), "59.00 sec");
    assert_eq!(human_readable_time(61_000.0 * 60.0, 1).unwrap(), "1.0 hr");
    assert_eq!(human_readable_time(0.95 * 86_400_000.0, 2).unwrap(), "22.80 hr");
    assert_eq!(human_readable_time(1.05 * 86_400_000.0, 2).unwrap(), "1.05 day");
    assert_eq!(human_readable_time(2.0 * 86_400_000.0, 1).unwrap(), "2.0 days");
}

#[test]
fn test_negative_duration_converts_to_crate_error() {
    let err: Error = human_readable_time(-0.5, 3).unwrap_err().into();
    assert_eq!(err.module(), "datetime");
    assert!(err.is_invalid_input());
    assert!(matches!(err, Error::Time(TimeError::NegativeDuration { .. })));
}
