//! Generated schedule occurrences.

use ledger_core::types::Date;

use super::template::Dated;

/// One generated occurrence of a schedule.
///
/// Holds an independent deep copy of whichever template governs the
/// occurrence, with its date already shifted by any active global-change
/// delta, together with the recurrence date: the date the occurrence
/// would fall on under the pure calendar pattern. The recurrence date is
/// the stable key exceptions are looked up by, so it is what a caller
/// hands back to [`Schedule::delete_at`](super::Schedule::delete_at) or
/// [`Schedule::add_global_change`](super::Schedule::add_global_change)
/// when an edit round-trips.
///
/// The engine never retains a spawn; the caller owns it entirely and may
/// mutate the transaction without affecting the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn<T> {
    transaction: T,
    recurrence_date: Date,
}

impl<T: Dated> Spawn<T> {
    pub(super) fn new(transaction: T, recurrence_date: Date) -> Self {
        Self {
            transaction,
            recurrence_date,
        }
    }

    /// Returns the actual calendar date of this occurrence, including
    /// any global-change shift.
    pub fn date(&self) -> Date {
        self.transaction.date()
    }

    /// Returns the un-shifted pattern date, the stable exception key.
    pub fn recurrence_date(&self) -> Date {
        self.recurrence_date
    }

    /// Returns the generated transaction.
    pub fn transaction(&self) -> &T {
        &self.transaction
    }

    /// Returns a mutable reference to the generated transaction.
    pub fn transaction_mut(&mut self) -> &mut T {
        &mut self.transaction
    }

    /// Consumes the spawn, yielding the transaction.
    pub fn into_transaction(self) -> T {
        self.transaction
    }
}
