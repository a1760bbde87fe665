//! Recurring-transaction schedules.
//!
//! This module provides:
//! - [`Schedule`]: a repeating transaction template with per-occurrence
//!   exceptions and bounded history compaction
//! - [`ScheduleBuilder`]: builder pattern for constructing schedules
//! - [`Spawn`]: one generated occurrence, owned by the caller
//! - [`Dated`]: the template bound the engine schedules over
//! - [`ScheduleError`]: construction and mutation errors
//!
//! # Examples
//!
//! ```
//! use ledger_core::types::{Date, RepeatType};
//! use ledger_models::schedules::ScheduleBuilder;
//! use ledger_models::transactions::Transaction;
//!
//! let rent = Transaction::new(Date::from_ymd(2024, 1, 31).unwrap(), "Rent", 1200.0);
//! let schedule = ScheduleBuilder::new()
//!     .template(rent)
//!     .repeat(RepeatType::Monthly)
//!     .build()
//!     .unwrap();
//!
//! let spawns = schedule.spawns(Date::from_ymd(2024, 5, 31).unwrap());
//! assert_eq!(spawns.len(), 5); // Jan 31, Feb 29, Mar 31, Apr 30, May 31
//! ```

mod error;
mod schedule;
mod spawn;
mod template;

pub use error::ScheduleError;
pub use schedule::{Schedule, ScheduleBuilder};
pub use spawn::Spawn;
pub use template::Dated;
