//! Display formatting shared by the page controllers

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format whole seconds as `MM:SS`.
///
/// Minutes are not rolled over into hours: `3661` renders as `61:01`.
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format a media position in (possibly fractional) seconds as `MM:SS`.
///
/// Fractions are floored. Positions that are not yet known (NaN, infinite
/// or negative) render as `00:00`.
pub fn format_media_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return format_clock(0);
    }
    format_clock(secs.floor() as u64)
}

/// Long-form date, e.g. `October 18, 2026`
pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%B %-d, %Y").to_string()
}

/// 12-hour time of day without seconds, e.g. `3:04 PM`
pub fn format_time_of_day<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%-I:%M %p").to_string()
}

/// Date and time with seconds, e.g. `10/18/2026, 3:04:05 PM`
pub fn format_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_clock_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_format_clock_has_no_hour_rollover() {
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(3661), "61:01");
    }

    #[test]
    fn test_format_media_time_floors_fractions() {
        assert_eq!(format_media_time(65.9), "01:05");
        assert_eq!(format_media_time(0.4), "00:00");
    }

    #[test]
    fn test_format_media_time_unknown_duration() {
        assert_eq!(format_media_time(f64::NAN), "00:00");
        assert_eq!(format_media_time(f64::INFINITY), "00:00");
        assert_eq!(format_media_time(-3.0), "00:00");
    }

    #[test]
    fn test_wall_clock_formats() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap();
        assert_eq!(format_date(&now), "October 18, 2026");
        assert_eq!(format_time_of_day(&now), "3:04 PM");
        assert_eq!(format_timestamp(&now), "10/18/2026, 3:04:05 PM");
    }

    #[test]
    fn test_wall_clock_midnight_is_twelve_am() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 0, 30, 0).unwrap();
        assert_eq!(format_time_of_day(&now), "12:30 AM");
    }
}
