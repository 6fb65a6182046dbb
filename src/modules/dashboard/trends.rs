//! Calendar arithmetic for the weekly teaching-hours trend.
//!
//! The "current week" runs from Sunday 00:00 local time through the following
//! Sunday 00:00 local time, regardless of which day the request arrives.
//! Everything here is pure and generic over the timezone so it can be tested
//! without a database (tests use `Utc`; the service passes `Local`).

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};

use crate::modules::dashboard::model::{DayHours, SessionSpan};

/// Weekday names in payload order, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Round to 2 decimal places.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// The Sunday on or before `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = today.weekday().num_days_from_sunday() as i64;
    today - Duration::days(days_since_sunday)
}

/// Half-open window `[Sunday 00:00, Sunday 00:00 + 7 days)` in `tz`.
///
/// Returns `None` when midnight does not exist in `tz` on that Sunday (a DST
/// gap); callers treat that as an internal error rather than shifting the
/// boundary.
pub fn week_bounds<Tz: TimeZone>(today: NaiveDate, tz: &Tz) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let start = week_start(today)
        .and_time(NaiveTime::MIN)
        .and_local_timezone(tz.clone())
        .earliest()?;
    let end = start.clone() + Duration::days(7);
    Some((start, end))
}

/// Accumulate session durations into per-weekday hour buckets.
///
/// The bucket is keyed by the weekday of the session's start in `tz`. All
/// seven weekdays are always present, Sunday first, defaulting to zero.
/// Each accumulation is rounded to 2 decimals individually, matching the
/// dashboard's historical output for multi-session days.
pub fn weekly_trends<Tz: TimeZone>(sessions: &[SessionSpan], tz: &Tz) -> Vec<DayHours> {
    let mut hours = [0.0_f64; 7];

    for session in sessions {
        let local_start = session.start_time.with_timezone(tz);
        let bucket = local_start.weekday().num_days_from_sunday() as usize;
        let duration_hours =
            (session.end_time - session.start_time).num_milliseconds() as f64 / 3_600_000.0;
        hours[bucket] = round_hours(hours[bucket] + duration_hours);
    }

    WEEKDAYS
        .iter()
        .zip(hours)
        .map(|(day, hours)| DayHours {
            day: (*day).to_string(),
            hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(start: &str, end: &str) -> SessionSpan {
        SessionSpan {
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
        }
    }

    #[test]
    fn test_week_start_every_weekday() {
        // 2024-01-07 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        for offset in 0..7 {
            let day = sunday + Duration::days(offset);
            assert_eq!(week_start(day), sunday, "offset {}", offset);
        }
        // The day before belongs to the previous week
        assert_ne!(week_start(sunday - Duration::days(1)), sunday);
    }

    #[test]
    fn test_week_bounds_utc() {
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let (start, end) = week_bounds(wednesday, &Utc).unwrap();
        assert_eq!(start, "2024-01-07T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(end, "2024-01-14T00:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[test]
    fn test_empty_trends_have_all_seven_days() {
        let trends = weekly_trends(&[], &Utc);
        assert_eq!(trends.len(), 7);
        assert_eq!(trends[0].day, "Sunday");
        assert_eq!(trends[6].day, "Saturday");
        assert!(trends.iter().all(|t| t.hours == 0.0));
    }

    #[test]
    fn test_two_hour_session_lands_in_its_weekday() {
        // 2024-01-01 is a Monday
        let trends = weekly_trends(
            &[session("2024-01-01T10:00:00Z", "2024-01-01T12:00:00Z")],
            &Utc,
        );
        assert_eq!(trends[1].day, "Monday");
        assert_eq!(trends[1].hours, 2.0);
        assert_eq!(trends.iter().map(|t| t.hours).sum::<f64>(), 2.0);
    }

    #[test]
    fn test_multiple_sessions_same_day_accumulate() {
        let trends = weekly_trends(
            &[
                session("2024-01-02T09:00:00Z", "2024-01-02T10:30:00Z"),
                session("2024-01-02T14:00:00Z", "2024-01-02T15:00:00Z"),
            ],
            &Utc,
        );
        assert_eq!(trends[2].day, "Tuesday");
        assert_eq!(trends[2].hours, 2.5);
    }

    #[test]
    fn test_per_session_rounding() {
        // 20 minutes = 0.3333... h; rounded per accumulation: 0.33, 0.66, 0.99
        let trends = weekly_trends(
            &[
                session("2024-01-03T09:00:00Z", "2024-01-03T09:20:00Z"),
                session("2024-01-03T10:00:00Z", "2024-01-03T10:20:00Z"),
                session("2024-01-03T11:00:00Z", "2024-01-03T11:20:00Z"),
            ],
            &Utc,
        );
        assert_eq!(trends[3].day, "Wednesday");
        assert_eq!(trends[3].hours, 0.99);
    }

    #[test]
    fn test_round_hours() {
        assert_eq!(round_hours(2.0), 2.0);
        assert_eq!(round_hours(1.005), 1.0); // 1.005 is not exactly representable
        assert_eq!(round_hours(0.333333), 0.33);
        assert_eq!(round_hours(0.335), 0.34);
    }
}
