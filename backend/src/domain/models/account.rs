//! Domain model for a bank account.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    /// ID of the owning user
    pub user_id: String,
    /// Institution / account label
    pub name: String,
    /// Current balance. Seeded at creation, afterwards mutated only by
    /// the ledger engine.
    pub balance: f64,
}
