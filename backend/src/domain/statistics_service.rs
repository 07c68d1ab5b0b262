//! Read-only aggregation over a user's ledger.

use chrono::Datelike;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::errors::LedgerError;
use crate::domain::models::TransactionKind;
use crate::storage::LedgerStorage;

/// One month's cash flow, `month` is 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFlow {
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub total_balance: f64,
    pub income_total: f64,
    pub expense_total: f64,
    /// Expense totals keyed by category label.
    pub category_totals: BTreeMap<String, f64>,
    /// Always twelve entries, January through December.
    pub monthly: Vec<MonthlyFlow>,
}

pub struct StatisticsService {
    store: Arc<dyn LedgerStorage>,
}

impl StatisticsService {
    pub fn new(store: Arc<dyn LedgerStorage>) -> Self {
        Self { store }
    }

    pub fn summary(&self, user_id: &str) -> Result<LedgerSummary, LedgerError> {
        let ledger = self.store.get_ledger(user_id)?;

        let total_balance = ledger.accounts.iter().map(|a| a.balance).sum();

        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        let mut category_totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut monthly: Vec<MonthlyFlow> = (1..=12)
            .map(|month| MonthlyFlow {
                month,
                income: 0.0,
                expense: 0.0,
            })
            .collect();

        for transaction in &ledger.transactions {
            let bucket = &mut monthly[transaction.date.month0() as usize];
            match transaction.kind {
                TransactionKind::Income => {
                    income_total += transaction.amount;
                    bucket.income += transaction.amount;
                }
                TransactionKind::Expense => {
                    expense_total += transaction.amount;
                    bucket.expense += transaction.amount;
                    *category_totals
                        .entry(transaction.category.clone())
                        .or_insert(0.0) += transaction.amount;
                }
            }
        }

        Ok(LedgerSummary {
            total_balance,
            income_total,
            expense_total,
            category_totals,
            monthly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BankAccount, Ledger, Transaction};
    use crate::storage::json::{JsonConnection, LedgerRepository};
    use chrono::NaiveDate;

    const USER: &str = "user-1";

    fn transaction(
        id: &str,
        amount: f64,
        kind: TransactionKind,
        category: &str,
        date: (i32, u32, u32),
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            user_id: USER.to_string(),
            amount,
            kind,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: String::new(),
            account_id: None,
        }
    }

    fn setup(ledger: Ledger) -> (StatisticsService, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let repository = Arc::new(LedgerRepository::new(connection));
        repository.put_ledger(USER, &ledger).unwrap();
        (StatisticsService::new(repository), temp_dir)
    }

    #[test]
    fn empty_ledger_summarizes_to_zeroes() {
        let (service, _tmp) = setup(Ledger::default());
        let summary = service.summary(USER).unwrap();
        assert_eq!(summary.total_balance, 0.0);
        assert_eq!(summary.income_total, 0.0);
        assert_eq!(summary.expense_total, 0.0);
        assert!(summary.category_totals.is_empty());
        assert_eq!(summary.monthly.len(), 12);
        assert!(summary.monthly.iter().all(|m| m.income == 0.0 && m.expense == 0.0));
    }

    #[test]
    fn totals_categories_and_months_fold_correctly() {
        let ledger = Ledger {
            transactions: vec![
                transaction("t1", 2000.0, TransactionKind::Income, "Salary", (2026, 3, 1)),
                transaction("t2", 150.0, TransactionKind::Expense, "Food", (2026, 3, 5)),
                transaction("t3", 50.0, TransactionKind::Expense, "Food", (2026, 7, 12)),
                transaction("t4", 80.0, TransactionKind::Expense, "Transport", (2026, 7, 20)),
            ],
            accounts: vec![
                BankAccount {
                    id: "a".to_string(),
                    user_id: USER.to_string(),
                    name: "A".to_string(),
                    balance: 900.0,
                },
                BankAccount {
                    id: "b".to_string(),
                    user_id: USER.to_string(),
                    name: "B".to_string(),
                    balance: 100.0,
                },
            ],
        };
        let (service, _tmp) = setup(ledger);
        let summary = service.summary(USER).unwrap();

        assert_eq!(summary.total_balance, 1000.0);
        assert_eq!(summary.income_total, 2000.0);
        assert_eq!(summary.expense_total, 280.0);
        assert_eq!(summary.category_totals.get("Food"), Some(&200.0));
        assert_eq!(summary.category_totals.get("Transport"), Some(&80.0));
        // Income categories never appear in the expense breakdown.
        assert!(!summary.category_totals.contains_key("Salary"));

        assert_eq!(summary.monthly[2].income, 2000.0);
        assert_eq!(summary.monthly[2].expense, 150.0);
        assert_eq!(summary.monthly[6].expense, 130.0);
        assert_eq!(summary.monthly[0].income, 0.0);
    }
}
