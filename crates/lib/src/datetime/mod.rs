//! Date and time helpers: timestamps, chart interval rounding and
//! human-readable durations.
//!
//! Naive date-times are treated as UTC throughout.

use chrono::{DateTime, NaiveDateTime, Utc};

pub mod errors;

pub use errors::TimeError;

/// Approximate number of bars a rounded interval should split a range into.
pub const BARS: i64 = 50;

/// Interval returned when either end of the range is unknown, in ms.
pub const DEFAULT_INTERVAL_MS: i64 = 1_800_000;

/// Intervals [`round_datetime_interval`] chooses from, in seconds.
pub const SUPPORTED_INTERVALS: [i64; 17] = [
    60,       // 1 minute
    120,      // 2 minutes
    300,      // 5 minutes
    600,      // 10 minutes
    1800,     // 30 minutes
    3600,     // 1 hour
    7200,     // 2 hours
    21600,    // 6 hours
    43200,    // 12 hours
    86400,    // 1 day
    259200,   // 3 days
    604800,   // 1 week
    1209600,  // 2 weeks
    2592000,  // 30 days
    7776000,  // 90 days
    15552000, // 180 days
    31104000, // 360 days
];

/// Milliseconds since the Unix epoch, truncated to whole seconds.
pub fn datetime_to_timestamp(dt: &NaiveDateTime) -> i64 {
    dt.and_utc().timestamp() * 1000
}

/// Attaches the UTC time zone to a naive date-time.
pub fn make_tz_aware(dt: NaiveDateTime) -> DateTime<Utc> {
    dt.and_utc()
}

/// Picks the supported interval closest to `(end - start) / BARS` and snaps
/// the range to it.
///
/// The choice is the one with the smallest absolute distance, the smaller
/// interval winning a tie. A base of 1000 s therefore gives 600 s rather
/// than 1800 s.
///
/// Returns `(interval_ms, start_ms, end_ms)` where the start is rounded down
/// and the end rounded up to a multiple of the interval. When either bound
/// is missing the result is `(DEFAULT_INTERVAL_MS, None, None)`.
///
/// ```
/// # use chrono::NaiveDate;
/// # use genery::datetime::round_datetime_interval;
/// let day = NaiveDate::from_ymd_opt(2020, 4, 18).unwrap();
/// let start = day.and_hms_opt(1, 5, 0).unwrap();
/// let end = day.and_hms_opt(9, 50, 0).unwrap();
///
/// let (interval, rounded_start, rounded_end) = round_datetime_interval(Some(start), Some(end));
/// assert_eq!(interval, 600_000);
/// assert_eq!(rounded_start, Some(day.and_hms_opt(1, 0, 0).unwrap().and_utc().timestamp_millis()));
/// assert_eq!(rounded_end, Some(day.and_hms_opt(9, 50, 0).unwrap().and_utc().timestamp_millis()));
/// ```
pub fn round_datetime_interval(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> (i64, Option<i64>, Option<i64>) {
    let (Some(start), Some(end)) = (start, end) else {
        return (DEFAULT_INTERVAL_MS, None, None);
    };

    let start = datetime_to_timestamp(&start);
    let end = datetime_to_timestamp(&end);
    let base_interval = (end - start) as f64 / 1000.0 / BARS as f64;

    // First of the closest intervals wins on a tie
    let mut closest = SUPPORTED_INTERVALS[0];
    for &candidate in &SUPPORTED_INTERVALS[1..] {
        if (base_interval - candidate as f64).abs() < (base_interval - closest as f64).abs() {
            closest = candidate;
        }
    }
    let interval = closest * 1000;

    let rounded_start = start.div_euclid(interval) * interval;
    let rounded_end = if end.rem_euclid(interval) > 0 {
        (end.div_euclid(interval) + 1) * interval
    } else {
        end
    };

    tracing::trace!(interval, rounded_start, rounded_end, "Rounded datetime interval");
    (interval, Some(rounded_start), Some(rounded_end))
}

/// Formats a duration given in milliseconds for humans.
///
/// Durations within 0.1 ms of zero are `instantly`; anything else is shown
/// in the largest fitting unit among ms, sec, min and hr with `round_to`
/// decimals. A day or more is always shown in days.
///
/// # Errors
///
/// Returns [`TimeError::NegativeDuration`] for negative durations.
///
/// ```
/// # use genery::datetime::human_readable_time;
/// assert_eq!(human_readable_time(0.05, 3)?, "instantly");
/// assert_eq!(human_readable_time(1500.0, 1)?, "1.5 sec");
/// assert_eq!(human_readable_time(90_000.0, 0)?, "2 min");
/// # Ok::<(), genery::datetime::TimeError>(())
/// ```
pub fn human_readable_time(ms: f64, round_to: usize) -> Result<String, TimeError> {
    if ms < 0.0 {
        return Err(TimeError::NegativeDuration { ms });
    }

    if is_close(ms, 0.0, 0.1) {
        return Ok("instantly".to_string());
    }

    if ms < 1000.0 {
        return Ok(format!("{ms:.round_to$} ms"));
    }

    let secs = ms / 1000.0;
    if secs < 60.0 {
        return Ok(format!("{secs:.round_to$} sec"));
    }

    let mins = secs / 60.0;
    if mins < 60.0 {
        return Ok(format!("{mins:.round_to$} min"));
    }

    let hours = mins / 60.0;
    if hours < 24.0 {
        return Ok(format!("{hours:.round_to$} hr"));
    }

    let days = hours / 24.0;
    let unit = if is_close(days, 1.0, 0.1) { "day" } else { "days" };
    Ok(format!("{days:.round_to$} {unit}"))
}

fn is_close(a: f64, b: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= abs_tol
}
