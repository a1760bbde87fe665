//! Calendar-day date type for ledger operations.
//!
//! This module provides:
//! - `Date`: type-safe date wrapper around chrono::NaiveDate
//! - `days_in_month`: month-length helper shared by the stepping engine
//!
//! All dates are calendar-day granularity. There is no time-of-day
//! component anywhere in the engine.
//!
//! # Examples
//!
//! ```
//! use ledger_core::types::time::Date;
//!
//! let date = Date::from_ymd(2024, 2, 9).unwrap();
//! assert_eq!(date.week_of_month(), 1); // second Friday of February
//! ```

use chrono::{Datelike, Local, NaiveDate, TimeDelta, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Returns the number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
///
/// # Examples
///
/// ```
/// use ledger_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29); // leap year
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    assert!((1..=12).contains(&month), "month must be in 1..=12");
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Type-safe calendar-day date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the date arithmetic the schedule
/// engine needs. Ordered and hashable so it can key exception collections.
///
/// # Examples
///
/// ```
/// use ledger_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Day difference
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    ///
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// let date = Date::from_ymd(2024, 10, 11).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Fri);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the 0-based weekday-of-month ordinal.
    ///
    /// A date in the first seven days of its month has ordinal 0, the
    /// next seven days ordinal 1, and so on. The "2nd Friday of October"
    /// therefore has `week_of_month() == 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 10, 11).unwrap().week_of_month(), 1);
    /// assert_eq!(Date::from_ymd(2024, 10, 31).unwrap().week_of_month(), 4);
    /// ```
    pub fn week_of_month(&self) -> u32 {
        (self.day() - 1) / 7
    }

    /// Returns the number of days in this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 2, 1).unwrap().days_in_month(), 29);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a signed number of days, returning `None` on calendar
    /// overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(
    ///     date.checked_add_days(2),
    ///     Some(Date::from_ymd(2024, 3, 1).unwrap())
    /// );
    /// assert_eq!(
    ///     date.checked_add_days(-28),
    ///     Some(Date::from_ymd(2024, 1, 31).unwrap())
    /// );
    /// ```
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(TimeDelta::days(days)).map(Date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative
    /// otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
