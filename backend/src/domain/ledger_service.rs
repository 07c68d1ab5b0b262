//! The ledger consistency engine.
//!
//! Owns the rule set that, given a transaction mutation, computes the
//! per-account balance adjustments required to keep every account's
//! balance equal to its seed balance plus the signed sum of the
//! transactions linked to it. Each operation is a single
//! read-modify-write of the user's ledger document, so the transaction
//! mutation and the balance adjustments commit together or not at all.

use log::{info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::commands::transactions::{
    CreateTransactionCommand, DeleteTransactionCommand, TransactionValues,
    UpdateTransactionCommand,
};
use crate::domain::errors::LedgerError;
use crate::domain::models::{Ledger, Transaction};
use crate::storage::LedgerStorage;

/// Round a balance to cents. Applied at the point of writing a new
/// balance, never to the delta itself, so rounding error does not
/// compound across edits.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Behavior switches for the engine.
#[derive(Debug, Clone)]
pub struct LedgerPolicy {
    /// When true, a transaction must name a bank account; when false an
    /// unlinked transaction (no balance impact) is accepted.
    pub require_account_link: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            require_account_link: true,
        }
    }
}

/// A `(account id, delta)` pair to apply to a balance.
type Adjustment = (String, f64);

pub struct LedgerService {
    store: Arc<dyn LedgerStorage>,
    policy: LedgerPolicy,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStorage>, policy: LedgerPolicy) -> Self {
        Self { store, policy }
    }

    /// Record a new transaction and apply its balance impact to the
    /// linked account, if any.
    pub fn create_transaction(
        &self,
        user_id: &str,
        command: CreateTransactionCommand,
    ) -> Result<Transaction, LedgerError> {
        let mut ledger = self.store.get_ledger(user_id)?;
        self.validate(&command.values, &ledger)?;

        let transaction = Self::build_transaction(
            Uuid::new_v4().to_string(),
            user_id.to_string(),
            command.values,
        );

        let mut adjustments: Vec<Adjustment> = Vec::new();
        if let Some(account_id) = &transaction.account_id {
            adjustments.push((account_id.clone(), transaction.signed_amount()));
        }
        Self::apply_adjustments(&mut ledger, &adjustments);

        ledger.transactions.insert(0, transaction.clone());
        self.store.put_ledger(user_id, &ledger)?;

        info!(
            "recorded transaction {} ({:?} {:.2}) for user {}",
            transaction.id, transaction.kind, transaction.amount, user_id
        );
        Ok(transaction)
    }

    /// Replace a transaction's values, reversing its old balance impact
    /// and applying the new one.
    ///
    /// When the old and new account are the same (including both unset),
    /// the reversal and the forward delta collapse into one adjustment:
    /// no intermediate inconsistent balance is ever written, and the
    /// balance is rounded once instead of twice.
    pub fn update_transaction(
        &self,
        user_id: &str,
        command: UpdateTransactionCommand,
    ) -> Result<Transaction, LedgerError> {
        let mut ledger = self.store.get_ledger(user_id)?;
        let position = ledger
            .transaction_position(&command.transaction_id)
            .ok_or_else(|| LedgerError::TransactionNotFound(command.transaction_id.clone()))?;
        self.validate(&command.values, &ledger)?;

        let original = ledger.transactions[position].clone();
        let updated = Self::build_transaction(
            original.id.clone(),
            original.user_id.clone(),
            command.values,
        );

        let reversal = original.reversal_delta();
        let forward = updated.signed_amount();

        let mut adjustments: Vec<Adjustment> = Vec::new();
        match (&original.account_id, &updated.account_id) {
            (Some(old), Some(new)) if old == new => {
                adjustments.push((old.clone(), reversal + forward));
            }
            (old, new) => {
                if let Some(old) = old {
                    adjustments.push((old.clone(), reversal));
                }
                if let Some(new) = new {
                    adjustments.push((new.clone(), forward));
                }
            }
        }
        Self::apply_adjustments(&mut ledger, &adjustments);

        ledger.transactions[position] = updated.clone();
        self.store.put_ledger(user_id, &ledger)?;

        info!(
            "updated transaction {} for user {}",
            updated.id, user_id
        );
        Ok(updated)
    }

    /// Remove a transaction, reversing its balance impact on the linked
    /// account if it has one.
    pub fn delete_transaction(
        &self,
        user_id: &str,
        command: DeleteTransactionCommand,
    ) -> Result<(), LedgerError> {
        let mut ledger = self.store.get_ledger(user_id)?;
        let position = ledger
            .transaction_position(&command.transaction_id)
            .ok_or_else(|| LedgerError::TransactionNotFound(command.transaction_id.clone()))?;

        let transaction = ledger.transactions.remove(position);
        if let Some(account_id) = &transaction.account_id {
            let adjustments = vec![(account_id.clone(), transaction.reversal_delta())];
            Self::apply_adjustments(&mut ledger, &adjustments);
        }
        self.store.put_ledger(user_id, &ledger)?;

        info!(
            "deleted transaction {} for user {}",
            transaction.id, user_id
        );
        Ok(())
    }

    /// All transactions for a user, newest-first.
    pub fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.store.get_ledger(user_id)?.transactions)
    }

    fn build_transaction(id: String, user_id: String, values: TransactionValues) -> Transaction {
        Transaction {
            id,
            user_id,
            amount: values.amount,
            kind: values.kind,
            category: values.category,
            date: values.date,
            description: values.description,
            account_id: values.account_id,
        }
    }

    /// Validation shared by create and update. A rejection leaves the
    /// ledger untouched: validation runs before any mutation.
    fn validate(&self, values: &TransactionValues, ledger: &Ledger) -> Result<(), LedgerError> {
        if !values.amount.is_finite() || values.amount <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "amount must be a positive number, got {}",
                values.amount
            )));
        }
        match &values.account_id {
            Some(account_id) => {
                if ledger.account(account_id).is_none() {
                    return Err(LedgerError::UnknownAccount(account_id.clone()));
                }
            }
            None => {
                if self.policy.require_account_link {
                    return Err(LedgerError::Validation(
                        "a bank account must be selected".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    fn apply_adjustments(ledger: &mut Ledger, adjustments: &[Adjustment]) {
        for (account_id, delta) in adjustments {
            match ledger.account_mut(account_id) {
                Some(account) => {
                    account.balance = round_cents(account.balance + delta);
                }
                None => {
                    // Validated ids always resolve; a miss can only be a
                    // reference that went stale inside this ledger
                    // document, which account deletion clears eagerly.
                    warn!(
                        "skipping balance adjustment for missing account {}",
                        account_id
                    );
                }
            }
        }
    }
}
