//! Domain model for a transaction.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// ID of the user this transaction belongs to
    pub user_id: String,
    /// Positive magnitude in currency units
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    /// Linked bank account; `None` means the transaction has no balance
    /// impact
    pub account_id: Option<String>,
}

impl Transaction {
    /// The balance impact of this transaction: `+amount` for income,
    /// `-amount` for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// The adjustment that undoes this transaction's impact.
    pub fn reversal_delta(&self) -> f64 {
        -self.signed_amount()
    }
}
