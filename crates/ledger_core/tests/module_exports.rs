//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use chrono::Weekday;

/// Test that the time module is accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use ledger_core::types::time::{days_in_month, Date};

    let date = Date::from_ymd(2024, 10, 11).unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 10);
    assert_eq!(date.day(), 11);
    assert_eq!(date.weekday(), Weekday::Fri);
    assert_eq!(days_in_month(2024, 2), 29);
}

/// Test that the repeat module is accessible via absolute path.
#[test]
fn test_repeat_module_exports() {
    use ledger_core::types::repeat::RepeatType;

    for repeat in RepeatType::ALL {
        assert!(!repeat.name().is_empty());
        assert!(!repeat.unit_name().is_empty());
    }

    let anchor = ledger_core::types::Date::from_ymd(2024, 1, 31).unwrap();
    let stepped = RepeatType::Monthly.advance(anchor, 1).unwrap();
    assert_eq!(stepped.day(), 29);
}

/// Test that error types are accessible and work correctly.
#[test]
fn test_error_types_exports() {
    use ledger_core::types::error::{DateError, StepError};
    use ledger_core::types::{Date, RepeatType};

    let _date_err = DateError::InvalidDate {
        year: 2024,
        month: 13,
        day: 1,
    };
    let _step_err = StepError::NoOccurrence {
        date: Date::from_ymd(2024, 10, 29).unwrap(),
        repeat: RepeatType::Weekday,
        count: 1,
    };
}

/// Test that types re-exports work at module level.
#[test]
fn test_types_reexports() {
    use ledger_core::types::{days_in_month, Date, DateError, RepeatType, StepError};

    let date = Date::from_ymd(2024, 6, 15).unwrap();
    let _ = days_in_month(date.year(), date.month());
    let _ = RepeatType::Daily;
    let _: Result<Date, DateError> = Date::from_ymd(2024, 2, 30);
    let _: Result<Date, StepError> = RepeatType::Weekly.advance(date, -4);
}

/// Test chrono integration with the time module.
#[test]
fn test_chrono_integration() {
    use chrono::Datelike;
    use ledger_core::types::Date;

    let date = Date::from_ymd(2024, 6, 15).unwrap();
    let naive = date.into_inner();
    assert_eq!(naive.year(), 2024);
    assert_eq!(naive.iso_week().week(), 24);
}
