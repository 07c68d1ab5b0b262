//! Error taxonomy for the domain services.
use thiserror::Error;

/// Errors produced by the ledger engine and account lifecycle.
///
/// `Validation` and `UnknownAccount` are recoverable: the operation was a
/// no-op and the caller should re-prompt the user. `Storage` means the
/// persisted store itself failed and must never be masked as a
/// successful mutation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),
    #[error("account '{0}' does not exist")]
    UnknownAccount(String),
    #[error("transaction '{0}' not found")]
    TransactionNotFound(String),
    #[error("account '{0}' not found")]
    AccountNotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Errors produced by authentication and user administration.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("this account is temporarily suspended")]
    AccountSuspended,
    #[error("{0}")]
    Validation(String),
    #[error("user '{0}' not found")]
    NotFound(String),
    #[error("you cannot delete your own account")]
    CannotDeleteSelf,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
