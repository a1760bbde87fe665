//! Core calendar and error types.
//!
//! This module provides:
//! - `time`: the calendar-day `Date` type and month helpers
//! - `repeat`: the `RepeatType` enumeration and calendar stepping engine
//! - `error`: structured error types for date construction and stepping
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module
//! level:
//! - [`Date`], [`days_in_month`] from `time`
//! - [`RepeatType`] from `repeat`
//! - [`DateError`], [`StepError`] from `error`

pub mod error;
pub mod repeat;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, StepError};
pub use repeat::RepeatType;
pub use time::{days_in_month, Date};
