//! # Ledger Models (Schedules & Transactions)
//!
//! Recurring-transaction schedules built on the `ledger_core` calendar
//! stepping engine.
//!
//! This crate provides:
//! - Transaction templates (the record a schedule repeats)
//! - The `Schedule` aggregate: repeat pattern, interval, stop date, and
//!   per-occurrence exceptions (deletions, global changes)
//! - Spawn generation: the date-ordered occurrence stream up to a horizon
//! - History compaction keeping exception storage bounded
//!
//! ## Design Principles
//!
//! - **Trait at the seam**: the engine sees templates only through the
//!   [`schedules::Dated`] bound, so any dated, cloneable record schedules
//! - **Value semantics**: cloning a schedule yields a fully independent
//!   copy, exception collections included
//! - **Builder pattern** for ergonomic construction with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
pub mod transactions;
