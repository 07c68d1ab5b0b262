//! Commands for transaction operations.
use chrono::NaiveDate;

use crate::domain::models::TransactionKind;

/// The user-editable fields of a transaction. Create takes them as-is;
/// update replaces the stored record's values with them wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionValues {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub account_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateTransactionCommand {
    pub values: TransactionValues,
}

#[derive(Debug, Clone)]
pub struct UpdateTransactionCommand {
    pub transaction_id: String,
    pub values: TransactionValues,
}

#[derive(Debug, Clone)]
pub struct DeleteTransactionCommand {
    pub transaction_id: String,
}
