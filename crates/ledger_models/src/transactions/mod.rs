//! Transaction templates.
//!
//! This module provides:
//! - [`Transaction`]: a minimal dated ledger record usable as a schedule
//!   template
//! - [`TransactionBuilder`]: builder with sensible defaults
//!
//! The full transaction/account/currency data model lives outside this
//! workspace; `Transaction` is the carrier the engine and its tests work
//! with, not a reimplementation of that model.

mod transaction;

pub use transaction::{Transaction, TransactionBuilder};
