//! Template bound for schedulable records.

use ledger_core::types::Date;

/// A dated, cloneable record a [`Schedule`](super::Schedule) can repeat.
///
/// The engine sees templates only through this trait: it reads the date,
/// rewrites it on clones and on the schedule's own reference during
/// compaction, and clones templates into spawns. Everything else about
/// the record is opaque.
///
/// # Examples
///
/// ```
/// use ledger_core::types::Date;
/// use ledger_models::schedules::Dated;
///
/// #[derive(Clone)]
/// struct Reminder {
///     due: Date,
///     text: String,
/// }
///
/// impl Dated for Reminder {
///     fn date(&self) -> Date {
///         self.due
///     }
///
///     fn set_date(&mut self, date: Date) {
///         self.due = date;
///     }
/// }
/// ```
pub trait Dated: Clone {
    /// Returns the record's date.
    fn date(&self) -> Date;

    /// Rewrites the record's date, leaving every other field untouched.
    fn set_date(&mut self, date: Date);
}
