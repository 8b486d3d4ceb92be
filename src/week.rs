// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ISO week identifiers and week boundary arithmetic.
//!
//! Weeks run Monday through Sunday. Identifiers use the ISO week-based
//! year, so a date near a year boundary can carry an identifier whose year
//! differs from its calendar year (e.g. 2025-01-01 is in 2025-W01 while
//! 2027-01-01 is in 2026-W53).

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Get the Monday of the week containing the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday();
    let days_from_monday = weekday.num_days_from_monday();
    date - chrono::Duration::days(days_from_monday as i64)
}

/// Get the week identifier (`YYYY-Wnn`) for a given date.
///
/// The week number is zero-padded to two digits; the week-based year is
/// written as-is.
pub fn week_id(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Resolve a week identifier to its `(Monday, Sunday)` date range.
///
/// Accepts `YYYY-Wnn` or a bare hyphen-separated `YYYY-nn`. Any failure to
/// split the identifier, parse the numeric parts, or resolve the week
/// number to a date surfaces as [`Error::InvalidWeek`] with the offending
/// identifier echoed back. Week numbers are not range-checked beyond what
/// chrono's ISO week-date resolution itself rejects: week 53 resolves only
/// for week-based years that actually have 53 weeks.
pub fn week_bounds(week: &str) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || Error::InvalidWeek(week.to_string());

    let (year_part, week_part) = week
        .split_once("-W")
        .or_else(|| week.split_once('-'))
        .ok_or_else(invalid)?;

    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let week_number: u32 = week_part.parse().map_err(|_| invalid())?;

    let start_of_week =
        NaiveDate::from_isoywd_opt(year, week_number, Weekday::Mon).ok_or_else(invalid)?;
    let end_of_week = start_of_week + chrono::Duration::days(6);

    Ok((start_of_week, end_of_week))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start() {
        // 2025-11-19 is a Wednesday
        let week_start = week_start(date(2025, 11, 19));

        // Should return Monday of that week (2025-11-17)
        assert_eq!(week_start, date(2025, 11, 17));
        assert_eq!(week_start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_start_already_monday() {
        // 2025-11-17 is a Monday
        assert_eq!(week_start(date(2025, 11, 17)), date(2025, 11, 17));
    }

    #[test]
    fn test_week_id_zero_padded() {
        assert_eq!(week_id(date(2025, 1, 6)), "2025-W02");
        assert_eq!(week_id(date(2024, 4, 1)), "2024-W14");
    }

    #[test]
    fn test_week_id_crosses_year_boundary() {
        // 2024-12-30 (Monday) and 2025-01-01 share an ISO week belonging to
        // week-based year 2025.
        assert_eq!(week_id(date(2024, 12, 30)), "2025-W01");
        assert_eq!(week_id(date(2025, 1, 1)), "2025-W01");
    }

    #[test]
    fn test_week_id_late_week_of_prior_year() {
        // 2027-01-01 falls in week 53 of week-based year 2026.
        assert_eq!(week_id(date(2027, 1, 1)), "2026-W53");
    }

    #[test]
    fn test_week_bounds() {
        let (start, end) = week_bounds("2024-W14").unwrap();
        assert_eq!(start, date(2024, 4, 1));
        assert_eq!(end, date(2024, 4, 7));
        assert_eq!(start.weekday(), Weekday::Mon);
        assert_eq!(end.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_week_bounds_bare_form() {
        let (start, end) = week_bounds("2024-14").unwrap();
        assert_eq!(start, date(2024, 4, 1));
        assert_eq!(end, date(2024, 4, 7));
    }

    #[test]
    fn test_week_bounds_week_53() {
        // 2026 has 53 ISO weeks; 2024 does not.
        assert!(week_bounds("2026-W53").is_ok());
        assert!(matches!(
            week_bounds("2024-W53"),
            Err(Error::InvalidWeek(_))
        ));
    }

    #[test]
    fn test_week_bounds_rejects_malformed() {
        for input in ["", "2024", "2024W14", "abcd-W14", "2024-Wxx", "2024-W60"] {
            match week_bounds(input) {
                Err(Error::InvalidWeek(echoed)) => assert_eq!(echoed, input),
                other => panic!("expected InvalidWeek for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_round_trip_contains_date() {
        // For any date, the bounds of its own week identifier contain it.
        for day in [
            date(2024, 1, 1),
            date(2024, 12, 31),
            date(2025, 6, 15),
            date(2026, 12, 28),
            date(2027, 1, 3),
        ] {
            let (start, end) = week_bounds(&week_id(day)).unwrap();
            assert!(start <= day && day <= end, "{day} outside [{start}, {end}]");
            assert_eq!(end, start + chrono::Duration::days(6));
            assert_eq!(start.weekday(), Weekday::Mon);
        }
    }
}
