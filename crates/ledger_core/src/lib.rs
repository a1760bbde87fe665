//! # ledger_core: Calendar Foundation for the moneta Ledger Engine
//!
//! ## Foundation Layer Role
//!
//! ledger_core is the bottom layer of the workspace, providing:
//! - `Date`: calendar-day date type wrapped around chrono (`types::time`)
//! - `RepeatType`: repeat-pattern enumeration and the calendar stepping
//!   engine behind recurring transactions (`types::repeat`)
//! - Error types: `DateError`, `StepError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! ledger_core has no dependencies on other ledger_* crates, with minimal
//! external dependencies:
//! - chrono: date arithmetic
//! - thiserror: error derives
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use ledger_core::types::{Date, RepeatType};
//!
//! // Step a month-end anchor forward one month: the day clamps.
//! let anchor = Date::from_ymd(2024, 1, 31).unwrap();
//! let next = RepeatType::Monthly.advance(anchor, 1).unwrap();
//! assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
//!
//! // Patterns carry their serialisation name.
//! assert_eq!(RepeatType::WeekdayLast.name(), "weekday_last");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation for `Date` and `RepeatType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
