//! Calendar-day helpers.
//!
//! Every comparison in the engine happens on local calendar days: a timestamp
//! is truncated to the local date, and two timestamps are "the same day" iff
//! their local year/month/day match. No other timezone conversion happens.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Truncate a stored timestamp to its local calendar day.
#[must_use]
pub fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Today's local calendar day.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The instant of local midnight at the start of `day`, as UTC.
///
/// When midnight falls in a DST gap the earliest valid local time after it is
/// used; the result always normalizes back to `day`.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    at_local_time(day, NaiveTime::MIN)
}

/// The instant of local noon on `day`, as UTC.
///
/// Noon is never inside a DST transition.
#[must_use]
pub fn noon_of(day: NaiveDate) -> DateTime<Utc> {
    at_local_time(day, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN))
}

fn at_local_time(day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let naive = NaiveDateTime::new(day, time);
    let mut probe = naive;
    // Skip forward past a DST gap one hour at a time.
    for _ in 0..3 {
        if let Some(local) = Local.from_local_datetime(&probe).earliest() {
            return local.with_timezone(&Utc);
        }
        probe += chrono::Duration::hours(1);
    }
    Utc.from_utc_datetime(&naive)
}

/// Format a day the way the detail view lists log entries (`Mon, Jan 15, 2024`).
#[must_use]
pub fn format_day(day: NaiveDate) -> String {
    day.format("%a, %b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_of_day_normalizes_to_same_day() {
        let d = day(2024, 3, 10);
        assert_eq!(local_day(&start_of_day(d)), d);
    }

    #[test]
    fn test_noon_normalizes_to_same_day() {
        let d = day(2024, 11, 3);
        assert_eq!(local_day(&noon_of(d)), d);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let d = day(2024, 6, 1);
        let morning = start_of_day(d) + Duration::minutes(1);
        let evening = noon_of(d) + Duration::hours(11);
        assert_eq!(local_day(&morning), local_day(&evening));
    }

    #[test]
    fn test_consecutive_days_differ() {
        let d = day(2024, 12, 31);
        assert_ne!(local_day(&noon_of(d)), local_day(&noon_of(d + Duration::days(1))));
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(day(2024, 1, 15)), "Mon, Jan 15, 2024");
    }
}
