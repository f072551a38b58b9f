//! Calendar helpers
//!
//! All dates are local calendar dates; nothing here consults a timezone.

use chrono::{Datelike, Duration, NaiveDate};

use crate::consts::{DATE_FORMAT, MINUTES_PER_DAY};
use crate::error::ParseError;

fn is_digits(part: &str, width: usize) -> bool {
    part.len() == width && part.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a strict `YYYY-MM-DD` date
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate {
        input: s.to_string(),
    };
    let mut parts = s.split('-');
    let (Some(y), Some(m), Some(d), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if !(is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2)) {
        return Err(invalid());
    }
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse `YYYY-MM` into (year, zero-based month)
pub(crate) fn parse_month(s: &str) -> Result<(i32, u32), ParseError> {
    let invalid = || ParseError::InvalidMonth {
        input: s.to_string(),
    };
    let (y, m) = s.split_once('-').ok_or_else(invalid)?;
    if !(is_digits(y, 4) && is_digits(m, 2)) {
        return Err(invalid());
    }
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month - 1))
}

/// Minutes since midnight for a strict `HH:MM` string
pub(crate) fn time_to_minutes(s: &str) -> Result<i32, ParseError> {
    let invalid = || ParseError::InvalidTime {
        input: s.to_string(),
    };
    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    if !(is_digits(h, 2) && is_digits(m, 2)) {
        return Err(invalid());
    }
    let hours: i32 = h.parse().map_err(|_| invalid())?;
    let minutes: i32 = m.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as `HH:MM`, wrapping around the day in both directions
pub(crate) fn minutes_to_time(total_minutes: i32) -> String {
    let mins = total_minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

pub(crate) fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// The Sunday on or after `date`
pub(crate) fn end_of_week(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let diff = if weekday == 0 { 0 } else { 7 - weekday };
    add_days(date, diff)
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a zero-based month
pub(crate) fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 + 1 {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub(crate) fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

pub(crate) fn weekday_long(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

pub(crate) fn weekday_short(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2024-03-10").unwrap(), d(2024, 3, 10));
        assert_eq!(parse_date("2024-02-29").unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn parse_date_rejects_malformed() {
        for input in [
            "",
            "2024-3-10",
            "2024/03/10",
            "2024-03-1a",
            "2024-03-10-01",
            "20240310",
            "2023-02-29",
            "2024-13-01",
            " 2024-03-10",
        ] {
            let err = parse_date(input).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidDate {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn format_parse_round_trip_across_years() {
        let mut date = d(2023, 1, 1);
        let end = d(2025, 12, 31);
        while date <= end {
            assert_eq!(parse_date(&format_date(date)).unwrap(), date);
            date = add_days(date, 1);
        }
    }

    #[test]
    fn format_date_zero_pads() {
        assert_eq!(format_date(d(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn time_round_trip_every_minute() {
        for m in 0..MINUTES_PER_DAY {
            let t = minutes_to_time(m);
            assert_eq!(time_to_minutes(&t).unwrap(), m);
        }
    }

    #[test]
    fn minutes_to_time_wraps() {
        assert_eq!(minutes_to_time(-30), "23:30");
        assert_eq!(minutes_to_time(1450), "00:10");
        assert_eq!(minutes_to_time(1440), "00:00");
        assert_eq!(minutes_to_time(-1440 * 2 - 1), "23:59");
    }

    #[test]
    fn time_to_minutes_rejects_malformed() {
        for input in ["24:00", "12:60", "9:00", "09-00", "ab:cd", ""] {
            assert!(time_to_minutes(input).is_err(), "{input}");
        }
    }

    #[test]
    fn end_of_week_is_upcoming_sunday() {
        // 2024-03-10 is a Sunday
        assert_eq!(end_of_week(d(2024, 3, 10)), d(2024, 3, 10));
        assert_eq!(end_of_week(d(2024, 3, 4)), d(2024, 3, 10));
        assert_eq!(end_of_week(d(2024, 3, 9)), d(2024, 3, 10));
        // crosses a year boundary
        assert_eq!(end_of_week(d(2024, 12, 30)), d(2025, 1, 5));
    }

    #[test]
    fn days_in_month_is_leap_aware() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 3), 30);
    }

    #[test]
    fn parse_month_zero_based() {
        assert_eq!(parse_month("2024-03").unwrap(), (2024, 2));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 11));
        assert!(parse_month("2024-00").is_err());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024").is_err());
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(weekday_long(d(2024, 3, 10)), "Sunday");
        assert_eq!(weekday_short(d(2024, 3, 11)), "Mon");
    }
}
