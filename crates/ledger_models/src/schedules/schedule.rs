//! Schedule and ScheduleBuilder implementation.

use std::collections::{BTreeMap, BTreeSet};

use ledger_core::types::{Date, RepeatType};
use tracing::{debug, trace};

use super::error::ScheduleError;
use super::spawn::Spawn;
use super::template::Dated;

/// A repeating transaction template with per-occurrence exceptions.
///
/// A schedule owns a reference template, a repeat pattern, an interval
/// ("every N units"), an optional stop date, and two exception
/// collections: recurrence dates whose occurrence is suppressed, and
/// global changes replacing the governing template from their recurrence
/// date forward. Every mutation triggers a compaction step that folds
/// consumed history into the reference and prunes exceptions the
/// generator can no longer reach, so exception storage stays bounded over
/// the life of a long-running schedule.
///
/// A schedule is single-writer mutable state: callers serialise access to
/// one instance. Cloning yields a fully independent snapshot, exception
/// collections included.
///
/// # Examples
///
/// ```
/// use ledger_core::types::{Date, RepeatType};
/// use ledger_models::schedules::Schedule;
/// use ledger_models::transactions::Transaction;
///
/// let rent = Transaction::new(Date::from_ymd(2024, 1, 31).unwrap(), "Rent", 1200.0);
/// let mut schedule = Schedule::new(rent, RepeatType::Monthly, 1).unwrap();
/// schedule.delete_at(Date::from_ymd(2024, 3, 31).unwrap()).unwrap();
///
/// let spawns = schedule.spawns(Date::from_ymd(2024, 5, 31).unwrap());
/// let dates: Vec<_> = spawns.iter().map(|s| s.date().to_string()).collect();
/// assert_eq!(dates, ["2024-01-31", "2024-02-29", "2024-04-30", "2024-05-31"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule<T: Dated> {
    /// The governing template; its date anchors spawn generation.
    reference: T,
    /// The repeat pattern.
    repeat: RepeatType,
    /// Repeats every N units of `repeat`.
    every: u32,
    /// No occurrence is generated strictly after this date.
    stop: Option<Date>,
    /// Recurrence dates whose occurrence is suppressed.
    deletions: BTreeSet<Date>,
    /// Recurrence date -> replacement template governing from there on.
    global_changes: BTreeMap<Date, T>,
}

impl<T: Dated> Schedule<T> {
    /// Creates a schedule from a reference template, pattern, and
    /// interval.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInterval`] when `every` is zero or
    /// beyond the supported stepping range.
    pub fn new(reference: T, repeat: RepeatType, every: u32) -> Result<Self, ScheduleError> {
        if every == 0 || every > i32::MAX as u32 {
            return Err(ScheduleError::InvalidInterval { every });
        }
        Ok(Self {
            reference,
            repeat,
            every,
            stop: None,
            deletions: BTreeSet::new(),
            global_changes: BTreeMap::new(),
        })
    }

    /// Returns the governing reference template.
    #[inline]
    pub fn reference(&self) -> &T {
        &self.reference
    }

    /// Returns the repeat pattern.
    #[inline]
    pub fn repeat(&self) -> RepeatType {
        self.repeat
    }

    /// Returns the repeat interval ("every N units").
    #[inline]
    pub fn every(&self) -> u32 {
        self.every
    }

    /// Returns the stop date, if any.
    #[inline]
    pub fn stop(&self) -> Option<Date> {
        self.stop
    }

    /// Sets or clears the stop date.
    pub fn set_stop(&mut self, stop: Option<Date>) {
        self.stop = stop;
    }

    /// Returns whether the occurrence at `date` is suppressed.
    pub fn is_deleted_at(&self, date: Date) -> bool {
        self.deletions.contains(&date)
    }

    /// Enumerates suppressed recurrence dates in ascending order.
    ///
    /// Persistence layers iterate this together with
    /// [`global_changes`](Self::global_changes) and rebuild the schedule
    /// through [`delete_at`](Self::delete_at) /
    /// [`add_global_change`](Self::add_global_change) on load.
    pub fn deletions(&self) -> impl Iterator<Item = Date> + '_ {
        self.deletions.iter().copied()
    }

    /// Enumerates global changes in ascending recurrence-date order.
    pub fn global_changes(&self) -> impl Iterator<Item = (Date, &T)> + '_ {
        self.global_changes.iter().map(|(date, txn)| (*date, txn))
    }

    /// Suppresses the occurrence at `date`, then compacts.
    ///
    /// # Errors
    ///
    /// A fatal stepping failure during compaction rolls the insertion
    /// back and surfaces as [`ScheduleError::Step`]; the schedule is left
    /// in its prior state.
    pub fn delete_at(&mut self, date: Date) -> Result<(), ScheduleError> {
        let inserted = self.deletions.insert(date);
        match self.update_reference() {
            Ok(()) => Ok(()),
            Err(err) => {
                if inserted {
                    self.deletions.remove(&date);
                }
                Err(err)
            }
        }
    }

    /// Installs `template` as a global change at recurrence date `date`,
    /// then compacts.
    ///
    /// From `date` forward the template governs every occurrence, and the
    /// difference between the template's own date and `date` shifts every
    /// subsequent occurrence by that many days.
    ///
    /// # Errors
    ///
    /// A fatal stepping failure during compaction rolls the insertion
    /// back and surfaces as [`ScheduleError::Step`]; the schedule is left
    /// in its prior state.
    pub fn add_global_change(&mut self, date: Date, template: T) -> Result<(), ScheduleError> {
        let previous = self.global_changes.insert(date, template);
        match self.update_reference() {
            Ok(()) => Ok(()),
            Err(err) => {
                match previous {
                    Some(prev) => {
                        self.global_changes.insert(date, prev);
                    }
                    None => {
                        self.global_changes.remove(&date);
                    }
                }
                Err(err)
            }
        }
    }

    /// Drops every deletion and global change.
    ///
    /// Used when a schedule's whole exception history is discarded.
    /// Idempotent.
    pub fn reset_exceptions(&mut self) {
        self.deletions.clear();
        self.global_changes.clear();
    }

    /// Generates the ordered occurrence stream up to `horizon`.
    ///
    /// Spawns come back strictly increasing by recurrence date, each an
    /// independent copy of whichever template governs its occurrence,
    /// dates shifted by any active global-change delta. Suppressed
    /// occurrences are omitted; a `Weekday` month without the anchor's
    /// 5th occurrence is skipped. The walk extends past `horizon` as far
    /// as pending exceptions require (a deletion beyond the horizon, a
    /// global change shifting occurrences backward) and never past the
    /// stop date.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_core::types::{Date, RepeatType};
    /// use ledger_models::schedules::Schedule;
    /// use ledger_models::transactions::Transaction;
    ///
    /// let rent = Transaction::new(Date::from_ymd(2024, 1, 31).unwrap(), "Rent", 1200.0);
    /// let schedule = Schedule::new(rent, RepeatType::Monthly, 1).unwrap();
    ///
    /// let spawns = schedule.spawns(Date::from_ymd(2024, 5, 31).unwrap());
    /// assert_eq!(spawns.len(), 5);
    /// assert_eq!(spawns[1].date(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn spawns(&self, horizon: Date) -> Vec<Spawn<T>> {
        let end = self.effective_end(horizon);
        let start = self.reference.date();
        let every = self.every as i32;

        let mut result = Vec::new();
        let mut current_ref = &self.reference;
        let mut date_delta: i64 = 0;
        let mut incsize: i32 = 0;

        loop {
            let stepped = self.repeat.advance(start, incsize);
            incsize = incsize.saturating_add(every);
            let date = match stepped {
                Ok(date) => date,
                // This month has no 5th occurrence of the anchor weekday.
                Err(ledger_core::types::StepError::NoOccurrence { .. }) => continue,
                // Out of representable calendar: nothing further to walk.
                Err(_) => break,
            };
            if date > end {
                break;
            }
            if let Some(txn) = self.global_changes.get(&date) {
                current_ref = txn;
                date_delta = txn.date() - date;
            }
            if !self.deletions.contains(&date) {
                let Some(shifted) = date.checked_add_days(date_delta) else {
                    debug!(recurrence = %date, delta = date_delta, "spawn date overflowed, skipping");
                    continue;
                };
                let mut transaction = current_ref.clone();
                transaction.set_date(shifted);
                result.push(Spawn::new(transaction, date));
            }
        }
        debug!(count = result.len(), horizon = %horizon, end = %end, "generated spawns");
        result
    }

    /// Computes how far spawn generation has to walk for `horizon`.
    ///
    /// Deletions beyond the horizon and global changes shifting
    /// occurrences backward both force the walk further out; the stop
    /// date caps it last.
    fn effective_end(&self, horizon: Date) -> Date {
        let mut end = horizon;
        if let Some(&last_deleted) = self.deletions.iter().next_back() {
            if last_deleted > end {
                end = last_deleted;
            }
        }
        for (&recurrence, txn) in &self.global_changes {
            let shifted = txn.date();
            if shifted < recurrence {
                if let Some(extended) = end.checked_add_days(recurrence - shifted) {
                    end = extended;
                }
            }
        }
        if let Some(stop) = self.stop {
            if end > stop {
                end = stop;
            }
        }
        end
    }

    /// Restores the schedule invariants after an exception mutation.
    ///
    /// Walks the reference date past deleted occurrences, consumes a
    /// global change landing on it, and prunes every exception at or
    /// before the updated reference date: once the reference has advanced
    /// past an exception, spawn generation can never consult it again.
    fn update_reference(&mut self) -> Result<(), ScheduleError> {
        // The scan is read-only; nothing is committed until it succeeds.
        let mut date = self.reference.date();
        while self.deletions.contains(&date) {
            date = self.repeat.advance_skipping(date, self.every as i32)?;
        }
        if let Some(replacement) = self.global_changes.remove(&date) {
            self.reference = replacement;
        } else {
            self.reference.set_date(date);
        }
        let cutoff = self.reference.date();
        self.deletions.retain(|&deleted| deleted > cutoff);
        self.global_changes.retain(|&changed, _| changed > cutoff);
        trace!(reference = %cutoff, "schedule reference compacted");
        Ok(())
    }
}

/// Builder for constructing schedules with flexible configuration.
///
/// # Examples
///
/// ```
/// use ledger_core::types::{Date, RepeatType};
/// use ledger_models::schedules::ScheduleBuilder;
/// use ledger_models::transactions::Transaction;
///
/// let salary = Transaction::new(Date::from_ymd(2024, 1, 5).unwrap(), "Salary", 3000.0);
/// let schedule = ScheduleBuilder::new()
///     .template(salary)
///     .repeat(RepeatType::Weekly)
///     .every(2)
///     .stop(Date::from_ymd(2024, 12, 31).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.every(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<T: Dated> {
    template: Option<T>,
    repeat: Option<RepeatType>,
    every: u32,
    stop: Option<Date>,
}

impl<T: Dated> Default for ScheduleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Dated> ScheduleBuilder<T> {
    /// Creates a new schedule builder with default settings.
    ///
    /// Default interval is 1; no stop date.
    pub fn new() -> Self {
        Self {
            template: None,
            repeat: None,
            every: 1,
            stop: None,
        }
    }

    /// Sets the reference template.
    pub fn template(mut self, template: T) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the repeat pattern.
    pub fn repeat(mut self, repeat: RepeatType) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Sets the repeat interval ("every N units").
    pub fn every(mut self, every: u32) -> Self {
        self.every = every;
        self
    }

    /// Sets the stop date.
    pub fn stop(mut self, stop: Date) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the template is missing
    /// - the repeat pattern is missing
    /// - the interval is invalid
    pub fn build(self) -> Result<Schedule<T>, ScheduleError> {
        let template = self
            .template
            .ok_or(ScheduleError::MissingField { field: "template" })?;
        let repeat = self
            .repeat
            .ok_or(ScheduleError::MissingField { field: "repeat" })?;
        let mut schedule = Schedule::new(template, repeat, self.every)?;
        schedule.set_stop(self.stop);
        Ok(schedule)
    }
}
