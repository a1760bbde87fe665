//! Repeat-pattern enumeration and the calendar stepping engine.
//!
//! This module provides:
//! - `RepeatType`: the six supported repeat patterns
//! - [`RepeatType::advance`]: strict stepping with month/year clamping and
//!   nth-weekday resolution
//! - [`RepeatType::advance_skipping`]: bounded retry over months missing a
//!   5th weekday occurrence
//!
//! The anchor of a pattern (day-of-month, week-of-month ordinal, weekday)
//! is implicit in the date it is applied to; `RepeatType` itself carries
//! no data.

use std::fmt;
use std::str::FromStr;

use super::error::StepError;
use super::time::{days_in_month, Date};

/// Extra probes [`RepeatType::advance_skipping`] attempts past the first
/// invalid target. Months with five occurrences of a given weekday are
/// never more than four months apart.
const MAX_SKIP_PROBES: i32 = 4;

/// Repeat pattern for a recurring transaction.
///
/// Defines how one occurrence date steps to the next. The `Weekday` and
/// `WeekdayLast` patterns anchor to the week-of-month ordinal and weekday
/// of the date they are applied to.
///
/// # Examples
///
/// ```
/// use ledger_core::types::{Date, RepeatType};
///
/// // 2nd Friday of October 2024 -> 2nd Friday of November 2024
/// let anchor = Date::from_ymd(2024, 10, 11).unwrap();
/// let next = RepeatType::Weekday.advance(anchor, 1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 11, 8).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatType {
    /// Every N days.
    Daily,
    /// Every N weeks.
    Weekly,
    /// Every N months, clamping to the last day of shorter months.
    Monthly,
    /// Every N years, clamping Feb 29 to Feb 28 outside leap years.
    Yearly,
    /// Every N months, anchored to the week-of-month ordinal and weekday
    /// ("2nd Friday of the month"). The only pattern that can fail to
    /// produce a date: a 5th occurrence does not exist in every month.
    Weekday,
    /// Every N months, anchored to the last occurrence of a weekday
    /// ("last Friday of the month"). Always produces a date.
    WeekdayLast,
}

impl RepeatType {
    /// All repeat types, in option-list order.
    pub const ALL: [RepeatType; 6] = [
        RepeatType::Daily,
        RepeatType::Weekly,
        RepeatType::Monthly,
        RepeatType::Yearly,
        RepeatType::Weekday,
        RepeatType::WeekdayLast,
    ];

    /// Returns the serialisation name of this repeat type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::RepeatType;
    ///
    /// assert_eq!(RepeatType::Daily.name(), "daily");
    /// assert_eq!(RepeatType::WeekdayLast.name(), "weekday_last");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
            RepeatType::Weekday => "weekday",
            RepeatType::WeekdayLast => "weekday_last",
        }
    }

    /// Returns the unit label for "every N units" displays.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::RepeatType;
    ///
    /// assert_eq!(RepeatType::Weekly.unit_name(), "week");
    /// assert_eq!(RepeatType::Weekday.unit_name(), "month");
    /// ```
    #[inline]
    pub fn unit_name(&self) -> &'static str {
        match self {
            RepeatType::Daily => "day",
            RepeatType::Weekly => "week",
            RepeatType::Monthly | RepeatType::Weekday | RepeatType::WeekdayLast => "month",
            RepeatType::Yearly => "year",
        }
    }

    /// Returns the human-readable option label for this pattern at the
    /// given anchor date.
    ///
    /// `Weekday` and `WeekdayLast` derive their label from the anchor;
    /// `WeekdayLast` is only applicable when the anchor lies in the last
    /// seven days of its month and returns `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::{Date, RepeatType};
    ///
    /// let anchor = Date::from_ymd(2024, 10, 11).unwrap();
    /// assert_eq!(
    ///     RepeatType::Weekday.description(anchor).unwrap(),
    ///     "Every second Friday of the month"
    /// );
    /// assert_eq!(RepeatType::WeekdayLast.description(anchor), None);
    /// ```
    pub fn description(&self, anchor: Date) -> Option<String> {
        match self {
            RepeatType::Daily => Some("Daily".to_string()),
            RepeatType::Weekly => Some("Weekly".to_string()),
            RepeatType::Monthly => Some("Monthly".to_string()),
            RepeatType::Yearly => Some("Yearly".to_string()),
            RepeatType::Weekday => {
                let position = ["first", "second", "third", "fourth", "fifth"]
                    [anchor.week_of_month() as usize];
                let weekday = anchor.into_inner().format("%A");
                Some(format!("Every {} {} of the month", position, weekday))
            }
            RepeatType::WeekdayLast => {
                if anchor.days_in_month() - anchor.day() < 7 {
                    let weekday = anchor.into_inner().format("%A");
                    Some(format!("Every last {} of the month", weekday))
                } else {
                    None
                }
            }
        }
    }

    /// Steps `date` by `count` units of this pattern.
    ///
    /// `count` may be negative; clamping and ordinal rules apply
    /// symmetrically in both directions.
    ///
    /// # Errors
    ///
    /// - [`StepError::NoOccurrence`] when a `Weekday` step targets a
    ///   month without a 5th occurrence of the anchor's weekday.
    /// - [`StepError::DateOverflow`] when the step leaves the
    ///   representable calendar.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::{Date, RepeatType};
    ///
    /// let jan31 = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(
    ///     RepeatType::Monthly.advance(jan31, 1).unwrap(),
    ///     Date::from_ymd(2024, 2, 29).unwrap()
    /// );
    ///
    /// let feb29 = Date::from_ymd(2020, 2, 29).unwrap();
    /// assert_eq!(
    ///     RepeatType::Yearly.advance(feb29, 1).unwrap(),
    ///     Date::from_ymd(2021, 2, 28).unwrap()
    /// );
    /// ```
    pub fn advance(&self, date: Date, count: i32) -> Result<Date, StepError> {
        match self {
            RepeatType::Daily => self.add_days(date, count, i64::from(count)),
            RepeatType::Weekly => self.add_days(date, count, i64::from(count) * 7),
            RepeatType::Monthly => {
                let (year, month) = self.shift_months(date, count)?;
                let day = date.day().min(days_in_month(year, month));
                self.make_date(date, count, year, month, day)
            }
            RepeatType::Yearly => {
                let year = self.checked_year(date, count, i64::from(date.year()) + i64::from(count))?;
                let day = date.day().min(days_in_month(year, date.month()));
                self.make_date(date, count, year, date.month(), day)
            }
            RepeatType::Weekday => {
                let ordinal = date.week_of_month();
                let weekday = date.weekday().num_days_from_monday();
                let (year, month) = self.shift_months(date, count)?;
                let first = self.make_date(date, count, year, month, 1)?;
                let offset = (weekday + 7 - first.weekday().num_days_from_monday()) % 7;
                let day = 1 + offset + 7 * ordinal;
                if day > days_in_month(year, month) {
                    return Err(StepError::NoOccurrence {
                        date,
                        repeat: *self,
                        count,
                    });
                }
                self.make_date(date, count, year, month, day)
            }
            RepeatType::WeekdayLast => {
                let weekday = date.weekday().num_days_from_monday();
                let (year, month) = self.shift_months(date, count)?;
                let last_day = days_in_month(year, month);
                let last = self.make_date(date, count, year, month, last_day)?;
                let back = (last.weekday().num_days_from_monday() + 7 - weekday) % 7;
                self.make_date(date, count, year, month, last_day - back)
            }
        }
    }

    /// Steps `date` by `count` units, probing past invalid targets.
    ///
    /// When [`advance`](Self::advance) reports [`StepError::NoOccurrence`]
    /// (possible only for `Weekday`), the distance grows one unit at a
    /// time in `count`'s direction until a valid date appears, with at
    /// most four extra attempts.
    ///
    /// # Errors
    ///
    /// [`StepError::SkipExhausted`] when every probe failed; unlike
    /// `NoOccurrence` this indicates a corrupt pattern/count combination
    /// and is not recoverable. [`StepError::DateOverflow`] passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::{Date, RepeatType};
    ///
    /// // Oct 29 2024 is a 5th Tuesday. November has four Tuesdays, so
    /// // the step lands on the 5th Tuesday of December instead.
    /// let anchor = Date::from_ymd(2024, 10, 29).unwrap();
    /// assert_eq!(
    ///     RepeatType::Weekday.advance_skipping(anchor, 1).unwrap(),
    ///     Date::from_ymd(2024, 12, 31).unwrap()
    /// );
    /// ```
    pub fn advance_skipping(&self, date: Date, count: i32) -> Result<Date, StepError> {
        let direction = if count < 0 { -1 } else { 1 };
        for probe in 0..=MAX_SKIP_PROBES {
            match self.advance(date, count.saturating_add(direction * probe)) {
                Ok(stepped) => return Ok(stepped),
                Err(StepError::NoOccurrence { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        Err(StepError::SkipExhausted {
            date,
            repeat: *self,
            count,
            probes: (MAX_SKIP_PROBES + 1) as u32,
        })
    }

    fn add_days(&self, date: Date, count: i32, days: i64) -> Result<Date, StepError> {
        date.checked_add_days(days)
            .ok_or(StepError::DateOverflow {
                date,
                repeat: *self,
                count,
            })
    }

    /// Shifts the date's (year, month) by `count` months.
    fn shift_months(&self, date: Date, count: i32) -> Result<(i32, u32), StepError> {
        let total =
            i64::from(date.year()) * 12 + i64::from(date.month()) - 1 + i64::from(count);
        let year = self.checked_year(date, count, total.div_euclid(12))?;
        let month = (total.rem_euclid(12) + 1) as u32;
        Ok((year, month))
    }

    fn checked_year(&self, date: Date, count: i32, year: i64) -> Result<i32, StepError> {
        i32::try_from(year).map_err(|_| StepError::DateOverflow {
            date,
            repeat: *self,
            count,
        })
    }

    fn make_date(
        &self,
        date: Date,
        count: i32,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Date, StepError> {
        // The components are valid by construction; from_ymd only fails
        // when the year falls outside chrono's representable range.
        Date::from_ymd(year, month, day).map_err(|_| StepError::DateOverflow {
            date,
            repeat: *self,
            count,
        })
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RepeatType {
    type Err = String;

    /// Parses a repeat type from string (case-insensitive).
    ///
    /// Accepts the serialisation names plus common aliases:
    /// - Daily: "daily"
    /// - Weekly: "weekly"
    /// - Monthly: "monthly"
    /// - Yearly: "yearly", "annual"
    /// - Weekday: "weekday", "nth-weekday"
    /// - WeekdayLast: "weekday_last", "last-weekday"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" | "annual" => Ok(RepeatType::Yearly),
            "weekday" | "nthweekday" => Ok(RepeatType::Weekday),
            "weekdaylast" | "lastweekday" => Ok(RepeatType::WeekdayLast),
            _ => Err(format!("Unknown repeat type: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RepeatType;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for RepeatType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for RepeatType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            RepeatType::from_str(&s).map_err(de::Error::custom)
        }
    }
}
