//! # Storage Traits
//!
//! These traits abstract away the storage implementation so the domain
//! layer can work against any backend (JSON files today, in-memory fakes
//! in tests) without modification. Both follow the same read-modify-write
//! contract: a collection is always fetched and stored whole, and a put
//! either fully succeeds or fully fails.

use anyhow::Result;

use crate::domain::models::{Ledger, User};

/// Per-user ledger storage, keyed by user id.
pub trait LedgerStorage: Send + Sync {
    /// Fetch the ledger for a user. A user with no stored data gets an
    /// empty ledger, not an error.
    fn get_ledger(&self, user_id: &str) -> Result<Ledger>;

    /// Replace the stored ledger for a user.
    fn put_ledger(&self, user_id: &str, ledger: &Ledger) -> Result<()>;
}

/// Storage for the application-wide user list.
pub trait UserStorage: Send + Sync {
    /// Fetch all users. An uninitialized store yields an empty list.
    fn get_users(&self) -> Result<Vec<User>>;

    /// Replace the stored user list.
    fn put_users(&self, users: &[User]) -> Result<()>;
}
