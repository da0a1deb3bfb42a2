use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_ERA, EPOCH_SHIFT, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    START_DATE_PATTERN,
};
use crate::error::DateError;
use crate::prelude::*;

/// A proleptic Gregorian calendar date with no time-of-day component.
///
/// Years are limited to `MIN_YEAR..=MAX_YEAR`, and the day is always valid for
/// its month. Field order makes the derived ordering chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl CalendarDate {
    /// Creates a date, validating each component against the calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Zero-padded `MMDD` form used in pay period labels.
    pub fn month_day(&self) -> String {
        format!("{:02}{:02}", self.month, self.day)
    }

    /// Number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Inverse of [`CalendarDate::days_since_epoch`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the day falls outside the supported years.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, DateError> {
        let first = days_from_civil(MIN_YEAR, 1, MIN_DAY);
        let last = days_from_civil(MAX_YEAR, MAX_MONTH, DAYS_IN_MONTH[MAX_MONTH as usize]);
        if !(first..=last).contains(&days) {
            return Err(DateError::OutOfRange);
        }
        let (year, month, day) = civil_from_days(days)?;
        Self::new(year, month, day)
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let target = self
            .days_since_epoch()
            .checked_add(days)
            .ok_or(DateError::OutOfRange)?;
        Self::from_days_since_epoch(target)
    }

    /// The following calendar day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on `MAX_YEAR`-12-31.
    pub fn succ(&self) -> Result<Self, DateError> {
        if self.day < days_in_month(self.year, self.month) {
            return Ok(Self {
                day: self.day + 1,
                ..*self
            });
        }
        if self.month < MAX_MONTH {
            return Ok(Self {
                month: self.month + 1,
                day:   MIN_DAY,
                ..*self
            });
        }
        if self.year >= MAX_YEAR {
            return Err(DateError::OutOfRange);
        }
        Ok(Self {
            year:  self.year + 1,
            month: 1,
            day:   MIN_DAY,
        })
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses strict `YYYY-MM-DD`: four, two and two ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let widths = [4, 2, 2];
        let well_formed = parts.len() == widths.len()
            && parts
                .iter()
                .zip(widths)
                .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let invalid = |_| DateError::InvalidFormat(trimmed.to_owned());
        let year = parts[0].parse::<u16>().map_err(invalid)?;
        let month = parts[1].parse::<u8>().map_err(invalid)?;
        let day = parts[2].parse::<u8>().map_err(invalid)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Parses a start date as accepted on the command line.
///
/// The text must match [`START_DATE_PATTERN`] (years 2000-2999) before it is
/// parsed, so impossible month/day pairs are still rejected afterwards.
///
/// # Errors
/// Returns `DateError::InvalidFormat` on a pattern mismatch, otherwise any
/// error from parsing the date itself.
pub fn parse_start_date(s: &str) -> Result<CalendarDate, DateError> {
    if !matches_start_pattern(s) {
        return Err(DateError::InvalidFormat(format!(
            "{s} (expected {START_DATE_PATTERN})"
        )));
    }
    s.parse()
}

#[allow(clippy::expect_used)]
static START_DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(START_DATE_PATTERN).expect("start date pattern compiles"));

fn matches_start_pattern(s: &str) -> bool {
    START_DATE_REGEX.is_match(s)
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

// Day counting runs over 400-year eras starting on March 1st, which puts the
// leap day at the end of each counted year.
fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(i64::from(GREGORIAN_CYCLE));
    let year_of_era = year - era * i64::from(GREGORIAN_CYCLE);
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

fn civil_from_days(days: i64) -> Result<(u16, u8, u8), DateError> {
    let days = days + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * i64::from(GREGORIAN_CYCLE) + i64::from(month <= 2);

    let year = u16::try_from(year).map_err(|_| DateError::OutOfRange)?;
    let month = u8::try_from(month).map_err(|_| DateError::OutOfRange)?;
    let day = u8::try_from(day).map_err(|_| DateError::OutOfRange)?;
    Ok((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_valid() {
        assert!(CalendarDate::new(1, 1, 1).is_ok());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(10000, 1, 1),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(matches!(
            CalendarDate::new(2026, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2026, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            })
        ));
        assert!(matches!(
            CalendarDate::new(2026, 4, 0),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_display_and_month_day() {
        let d = date(2026, 1, 5);
        assert_eq!(d.to_string(), "2026-01-05");
        assert_eq!(d.month_day(), "0105");
        assert_eq!(date(7, 12, 31).to_string(), "0007-12-31");
        assert_eq!(date(2026, 12, 31).month_day(), "1231");
    }

    #[test]
    fn test_parse_valid() {
        let d: CalendarDate = "2026-06-15".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2026, 6, 15));

        let padded: CalendarDate = "  1999-01-31 ".parse().unwrap();
        assert_eq!(padded, date(1999, 1, 31));
    }

    #[test]
    fn test_parse_invalid_format() {
        for input in [
            "2026/01/01",
            "26-01-01",
            "2026-1-01",
            "2026-01-1",
            "2026-01",
            "2026-01-01-01",
            "2026-0a-01",
            "+026-01-01",
        ] {
            assert!(
                matches!(input.parse::<CalendarDate>(), Err(DateError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
        assert!(matches!(
            "   ".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        assert!(matches!(
            "2026-02-30".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "2026-13-01".parse::<CalendarDate>(),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            "0000-01-01".parse::<CalendarDate>(),
            Err(DateError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2026-01-01").unwrap(), date(2026, 1, 1));
        assert_eq!(parse_start_date("2999-12-31").unwrap(), date(2999, 12, 31));
        assert_eq!(parse_start_date("2000-02-29").unwrap(), date(2000, 2, 29));

        for input in [
            "2026/01/01",
            "26-01-01",
            "1999-12-31",
            "3000-01-01",
            " 2026-01-01",
            "2026-01-01 ",
            "",
        ] {
            assert!(
                matches!(parse_start_date(input), Err(DateError::InvalidFormat(_))),
                "{input:?} should fail the start date pattern"
            );
        }
    }

    #[test]
    fn test_start_pattern_is_the_matcher() {
        assert_eq!(START_DATE_REGEX.as_str(), START_DATE_PATTERN);
        assert!(matches_start_pattern("2000-01-01"));
        assert!(matches_start_pattern("2999-99-99"));
        assert!(!matches_start_pattern("1999-01-01"));
        assert!(!matches_start_pattern("2026-01-01\n"));
        assert!(!matches_start_pattern("x2026-01-01"));

        let err = parse_start_date("26-01-01").unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidFormat(format!("26-01-01 (expected {START_DATE_PATTERN})"))
        );
    }

    #[test]
    fn test_parse_start_date_checks_calendar_after_pattern() {
        assert!(matches!(
            parse_start_date("2026-02-29"),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            parse_start_date("2026-00-10"),
            Err(DateError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_days_since_epoch_known_values() {
        assert_eq!(date(1970, 1, 1).days_since_epoch(), 0);
        assert_eq!(date(1970, 1, 2).days_since_epoch(), 1);
        assert_eq!(date(1969, 12, 31).days_since_epoch(), -1);
        assert_eq!(date(2000, 3, 1).days_since_epoch(), 11_017);
        assert_eq!(date(2026, 1, 1).days_since_epoch(), 20_454);
    }

    #[test]
    fn test_from_days_since_epoch_bounds() {
        let first = date(1, 1, 1);
        let last = date(9999, 12, 31);
        assert_eq!(
            CalendarDate::from_days_since_epoch(first.days_since_epoch()).unwrap(),
            first
        );
        assert_eq!(
            CalendarDate::from_days_since_epoch(last.days_since_epoch()).unwrap(),
            last
        );
        assert!(matches!(
            CalendarDate::from_days_since_epoch(first.days_since_epoch() - 1),
            Err(DateError::OutOfRange)
        ));
        assert!(matches!(
            CalendarDate::from_days_since_epoch(last.days_since_epoch() + 1),
            Err(DateError::OutOfRange)
        ));
        assert!(matches!(
            CalendarDate::from_days_since_epoch(i64::MAX),
            Err(DateError::OutOfRange)
        ));
    }

    #[test]
    fn test_add_days() {
        struct TestCase {
            start:       (u16, u8, u8),
            days:        i64,
            expected:    (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2026, 1, 1),
                days:        13,
                expected:    (2026, 1, 14),
                description: "within a month",
            },
            TestCase {
                start:       (2026, 1, 29),
                days:        13,
                expected:    (2026, 2, 11),
                description: "across a month",
            },
            TestCase {
                start:       (2026, 12, 28),
                days:        6,
                expected:    (2027, 1, 3),
                description: "across a year",
            },
            TestCase {
                start:       (2024, 2, 28),
                days:        1,
                expected:    (2024, 2, 29),
                description: "onto a leap day",
            },
            TestCase {
                start:       (2100, 2, 28),
                days:        1,
                expected:    (2100, 3, 1),
                description: "century without leap day",
            },
            TestCase {
                start:       (2026, 3, 1),
                days:        -1,
                expected:    (2026, 2, 28),
                description: "backwards",
            },
            TestCase {
                start:       (2026, 1, 1),
                days:        365,
                expected:    (2027, 1, 1),
                description: "full common year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let (ey, em, ed) = case.expected;
            assert_eq!(
                date(y, m, d).add_days(case.days).unwrap(),
                date(ey, em, ed),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(matches!(
            date(9999, 12, 31).add_days(1),
            Err(DateError::OutOfRange)
        ));
        assert!(matches!(
            date(2026, 1, 1).add_days(i64::MAX),
            Err(DateError::OutOfRange)
        ));
    }

    #[test]
    fn test_succ_matches_add_days() {
        let mut current = date(2023, 12, 25);
        for _ in 0..800 {
            let next = current.succ().unwrap();
            assert_eq!(next, current.add_days(1).unwrap());
            assert_eq!(next.days_since_epoch(), current.days_since_epoch() + 1);
            current = next;
        }
        assert!(matches!(
            date(9999, 12, 31).succ(),
            Err(DateError::OutOfRange)
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2025, 12, 31) < date(2026, 1, 1));
        assert!(date(2026, 1, 31) < date(2026, 2, 1));
        assert!(date(2026, 2, 1) < date(2026, 2, 2));
    }

    #[test]
    fn test_serde() {
        let d = date(2026, 1, 1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2026-01-01\"");

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>("\"2026-02-30\"").is_err());
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
    }
}
