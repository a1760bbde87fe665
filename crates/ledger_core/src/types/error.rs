//! Error types for date construction and calendar stepping.
//!
//! This module provides:
//! - `DateError`: errors from date construction and parsing
//! - `StepError`: errors from the repeat-pattern stepping engine

use thiserror::Error;

use super::repeat::RepeatType;
use super::time::Date;

/// Date-related errors.
///
/// # Examples
///
/// ```
/// use ledger_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Errors from stepping a date by repeat-pattern units.
///
/// `NoOccurrence` is the ordinary, recoverable case: the target month has
/// no 5th occurrence of the anchor's weekday. Spawn generation skips it
/// and [`RepeatType::advance_skipping`] probes past it. `SkipExhausted`
/// and `DateOverflow` are not recoverable at the stepping level and
/// propagate to the caller.
///
/// # Examples
///
/// ```
/// use ledger_core::types::{Date, RepeatType, StepError};
///
/// // Oct 29 2024 is a 5th Tuesday; November has only four.
/// let anchor = Date::from_ymd(2024, 10, 29).unwrap();
/// let err = RepeatType::Weekday.advance(anchor, 1).unwrap_err();
/// assert!(matches!(err, StepError::NoOccurrence { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepError {
    /// The target month has no such ordinal weekday (only possible for
    /// the 5th occurrence under [`RepeatType::Weekday`]).
    #[error("no {repeat} occurrence {count} unit(s) from {date}")]
    NoOccurrence {
        /// The date being stepped from.
        date: Date,
        /// The repeat pattern applied.
        repeat: RepeatType,
        /// The signed unit count of the step.
        count: i32,
    },

    /// Bounded probing found no valid occurrence; the pattern/count
    /// combination is corrupt.
    #[error("no valid {repeat} occurrence within {probes} probes from {date} (count {count})")]
    SkipExhausted {
        /// The date being stepped from.
        date: Date,
        /// The repeat pattern applied.
        repeat: RepeatType,
        /// The signed unit count of the step.
        count: i32,
        /// Number of probes attempted before giving up.
        probes: u32,
    },

    /// The step left the representable calendar range.
    #[error("date arithmetic overflow stepping {count} {repeat} unit(s) from {date}")]
    DateOverflow {
        /// The date being stepped from.
        date: Date,
        /// The repeat pattern applied.
        repeat: RepeatType,
        /// The signed unit count of the step.
        count: i32,
    },
}
