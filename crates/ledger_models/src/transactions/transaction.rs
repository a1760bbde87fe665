//! Transaction template record.

use std::fmt;

use ledger_core::types::Date;

use crate::schedules::Dated;

/// A minimal dated ledger record.
///
/// Carries the fields a recurring-transaction template needs; richer
/// transaction models implement [`Dated`] themselves and schedule just as
/// well.
///
/// # Examples
///
/// ```
/// use ledger_models::transactions::Transaction;
/// use ledger_core::types::Date;
///
/// let rent = Transaction::new(
///     Date::from_ymd(2024, 1, 31).unwrap(),
///     "Rent",
///     1200.0,
/// );
/// assert_eq!(rent.date, Date::from_ymd(2024, 1, 31).unwrap());
/// assert_eq!(format!("{}", rent), "2024-01-31 Rent 1200.00");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    /// Date of the transaction.
    pub date: Date,
    /// Short description ("Rent", "Salary").
    pub description: String,
    /// Counterparty, empty when unknown.
    pub payee: String,
    /// Check number, empty when not a check.
    pub checkno: String,
    /// Signed amount; positive for inflows.
    pub amount: f64,
}

impl Transaction {
    /// Creates a transaction with empty payee and check number.
    pub fn new(date: Date, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            payee: String::new(),
            checkno: String::new(),
            amount,
        }
    }

    /// Starts a builder anchored at `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_models::transactions::Transaction;
    /// use ledger_core::types::Date;
    ///
    /// let txn = Transaction::builder(Date::from_ymd(2024, 3, 1).unwrap())
    ///     .description("Electricity")
    ///     .payee("Utility Co")
    ///     .amount(-80.5)
    ///     .build();
    /// assert_eq!(txn.payee, "Utility Co");
    /// ```
    pub fn builder(date: Date) -> TransactionBuilder {
        TransactionBuilder::new(date)
    }
}

impl Dated for Transaction {
    fn date(&self) -> Date {
        self.date
    }

    fn set_date(&mut self, date: Date) {
        self.date = date;
    }
}

impl fmt::Display for Transaction {
    /// Formats as a single ledger line: date, description, amount.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.date, self.description, self.amount)
    }
}

/// Builder for [`Transaction`] with empty-string and zero defaults.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    date: Date,
    description: String,
    payee: String,
    checkno: String,
    amount: f64,
}

impl TransactionBuilder {
    /// Creates a builder anchored at `date`.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            description: String::new(),
            payee: String::new(),
            checkno: String::new(),
            amount: 0.0,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the payee.
    pub fn payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = payee.into();
        self
    }

    /// Sets the check number.
    pub fn checkno(mut self, checkno: impl Into<String>) -> Self {
        self.checkno = checkno.into();
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Builds the transaction.
    pub fn build(self) -> Transaction {
        Transaction {
            date: self.date,
            description: self.description,
            payee: self.payee,
            checkno: self.checkno,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let txn = Transaction::new(ymd(2024, 1, 31), "Rent", 1200.0);
        assert_eq!(txn.description, "Rent");
        assert_eq!(txn.payee, "");
        assert_eq!(txn.checkno, "");
        assert_eq!(txn.amount, 1200.0);
    }

    #[test]
    fn test_builder() {
        let txn = Transaction::builder(ymd(2024, 3, 1))
            .description("Electricity")
            .payee("Utility Co")
            .checkno("107")
            .amount(-80.5)
            .build();
        assert_eq!(txn.date, ymd(2024, 3, 1));
        assert_eq!(txn.checkno, "107");
        assert_eq!(txn.amount, -80.5);
    }

    #[test]
    fn test_dated_impl() {
        let mut txn = Transaction::new(ymd(2024, 1, 31), "Rent", 1200.0);
        assert_eq!(Dated::date(&txn), ymd(2024, 1, 31));
        txn.set_date(ymd(2024, 2, 29));
        assert_eq!(txn.date, ymd(2024, 2, 29));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Transaction::new(ymd(2024, 1, 31), "Rent", 1200.0);
        let mut copy = original.clone();
        copy.set_date(ymd(2024, 6, 1));
        copy.amount = 0.0;
        assert_eq!(original.date, ymd(2024, 1, 31));
        assert_eq!(original.amount, 1200.0);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(ymd(2024, 1, 31), "Rent", 1200.0);
        assert_eq!(format!("{}", txn), "2024-01-31 Rent 1200.00");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let txn = Transaction::builder(ymd(2024, 3, 1))
            .description("Electricity")
            .payee("Utility Co")
            .amount(-80.5)
            .build();
        let json = serde_json::to_string(&txn).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, txn);
    }
}
