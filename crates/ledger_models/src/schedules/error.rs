//! Schedule construction and mutation error types.

use ledger_core::types::StepError;
use thiserror::Error;

/// Errors from schedule construction and mutation.
///
/// Calendar-level [`StepError::NoOccurrence`] never escapes a schedule:
/// spawn generation skips such occurrences and compaction probes past
/// them. Only the fatal stepping conditions surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The repeat interval is zero or beyond the supported step range.
    #[error("invalid schedule interval {every}: must be in 1..={}", i32::MAX)]
    InvalidInterval {
        /// The rejected interval.
        every: u32,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A fatal calendar stepping failure surfaced by compaction.
    #[error(transparent)]
    Step(#[from] StepError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interval_display() {
        let err = ScheduleError::InvalidInterval { every: 0 };
        assert_eq!(
            format!("{}", err),
            "invalid schedule interval 0: must be in 1..=2147483647"
        );
    }

    #[test]
    fn test_step_error_conversion() {
        use ledger_core::types::{Date, RepeatType};

        let step = StepError::SkipExhausted {
            date: Date::from_ymd(2024, 1, 1).unwrap(),
            repeat: RepeatType::Weekday,
            count: 1,
            probes: 5,
        };
        let err: ScheduleError = step.clone().into();
        assert_eq!(err, ScheduleError::Step(step));
    }
}
