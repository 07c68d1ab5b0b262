//! The per-user ledger document.
use serde::{Deserialize, Serialize};

use super::{BankAccount, Transaction};

/// Everything the store holds for one user: their transactions
/// (newest-first by convention) and their bank accounts.
///
/// The ledger is always read and written as a whole, which is what makes
/// each engine operation atomic: a transaction mutation and the balance
/// adjustments it implies land in the same write, or not at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<BankAccount>,
}

impl Ledger {
    pub fn account(&self, account_id: &str) -> Option<&BankAccount> {
        self.accounts.iter().find(|a| a.id == account_id)
    }

    pub fn account_mut(&mut self, account_id: &str) -> Option<&mut BankAccount> {
        self.accounts.iter_mut().find(|a| a.id == account_id)
    }

    pub fn transaction_position(&self, transaction_id: &str) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == transaction_id)
    }
}
