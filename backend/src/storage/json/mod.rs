//! JSON-document storage backend.
//!
//! One `users.json` for the user list and one `ledgers/<user_id>.json`
//! per user, each read and written whole.

pub mod connection;
pub mod ledger_repository;
pub mod user_repository;

pub use connection::JsonConnection;
pub use ledger_repository::LedgerRepository;
pub use user_repository::UserRepository;
