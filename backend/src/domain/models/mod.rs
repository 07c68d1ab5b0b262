//! Domain models for the Nexo backend.

pub mod account;
pub mod ledger;
pub mod transaction;
pub mod user;

pub use account::BankAccount;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
pub use user::{Role, User};
