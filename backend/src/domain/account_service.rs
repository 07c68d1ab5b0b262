//! Bank account lifecycle.

use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::commands::accounts::{CreateAccountCommand, DeleteAccountCommand};
use crate::domain::errors::LedgerError;
use crate::domain::models::BankAccount;
use crate::storage::LedgerStorage;

pub struct AccountService {
    store: Arc<dyn LedgerStorage>,
}

impl AccountService {
    pub fn new(store: Arc<dyn LedgerStorage>) -> Self {
        Self { store }
    }

    /// Create an account seeded with an initial balance. The seed is the
    /// baseline every later balance adjustment builds on. Any finite
    /// value is a valid seed, including a negative one for an account
    /// that starts overdrawn.
    pub fn create_account(
        &self,
        user_id: &str,
        command: CreateAccountCommand,
    ) -> Result<BankAccount, LedgerError> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "account name must not be empty".to_string(),
            ));
        }
        if !command.initial_balance.is_finite() {
            return Err(LedgerError::Validation(format!(
                "initial balance must be a number, got {}",
                command.initial_balance
            )));
        }

        let mut ledger = self.store.get_ledger(user_id)?;
        let account = BankAccount {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            balance: command.initial_balance,
        };
        ledger.accounts.push(account.clone());
        self.store.put_ledger(user_id, &ledger)?;

        info!("created account {} for user {}", account.id, user_id);
        Ok(account)
    }

    /// Delete an account and clear the link on every transaction that
    /// pointed at it. The transactions survive as historical records;
    /// only the balance linkage goes away.
    pub fn delete_account(
        &self,
        user_id: &str,
        command: DeleteAccountCommand,
    ) -> Result<(), LedgerError> {
        let mut ledger = self.store.get_ledger(user_id)?;
        let position = ledger
            .accounts
            .iter()
            .position(|a| a.id == command.account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(command.account_id.clone()))?;

        ledger.accounts.remove(position);
        let mut unlinked = 0usize;
        for transaction in &mut ledger.transactions {
            if transaction.account_id.as_deref() == Some(command.account_id.as_str()) {
                transaction.account_id = None;
                unlinked += 1;
            }
        }
        self.store.put_ledger(user_id, &ledger)?;

        info!(
            "deleted account {} for user {} ({} transactions unlinked)",
            command.account_id, user_id, unlinked
        );
        Ok(())
    }

    pub fn list_accounts(&self, user_id: &str) -> Result<Vec<BankAccount>, LedgerError> {
        Ok(self.store.get_ledger(user_id)?.accounts)
    }
}
