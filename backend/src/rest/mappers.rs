//! Conversions between domain types and the shared wire DTOs.

use crate::domain::commands::transactions::TransactionValues;
use crate::domain::insight_service::AiAnalysis;
use crate::domain::models::{BankAccount, Role, Transaction, TransactionKind, User};
use crate::domain::statistics_service::LedgerSummary;

pub fn to_wire_kind(kind: TransactionKind) -> shared::TransactionKind {
    match kind {
        TransactionKind::Income => shared::TransactionKind::Income,
        TransactionKind::Expense => shared::TransactionKind::Expense,
    }
}

pub fn from_wire_kind(kind: shared::TransactionKind) -> TransactionKind {
    match kind {
        shared::TransactionKind::Income => TransactionKind::Income,
        shared::TransactionKind::Expense => TransactionKind::Expense,
    }
}

pub fn to_wire_transaction(transaction: Transaction) -> shared::Transaction {
    shared::Transaction {
        id: transaction.id,
        user_id: transaction.user_id,
        amount: transaction.amount,
        kind: to_wire_kind(transaction.kind),
        category: transaction.category,
        date: transaction.date,
        description: transaction.description,
        account_id: transaction.account_id,
    }
}

pub fn to_transaction_values(input: shared::TransactionInput) -> TransactionValues {
    TransactionValues {
        amount: input.amount,
        kind: from_wire_kind(input.kind),
        category: input.category,
        date: input.date,
        description: input.description,
        account_id: input.account_id,
    }
}

pub fn to_wire_account(account: BankAccount) -> shared::BankAccount {
    shared::BankAccount {
        id: account.id,
        user_id: account.user_id,
        name: account.name,
        balance: account.balance,
    }
}

pub fn to_wire_role(role: Role) -> shared::Role {
    match role {
        Role::User => shared::Role::User,
        Role::Admin => shared::Role::Admin,
    }
}

pub fn from_wire_role(role: shared::Role) -> Role {
    match role {
        shared::Role::User => Role::User,
        shared::Role::Admin => Role::Admin,
    }
}

/// The wire user deliberately has no password field.
pub fn to_wire_user(user: User) -> shared::User {
    shared::User {
        id: user.id,
        email: user.email,
        name: user.name,
        role: to_wire_role(user.role),
        is_active: user.is_active,
    }
}

pub fn to_wire_analysis(analysis: AiAnalysis) -> shared::AiAnalysis {
    shared::AiAnalysis {
        summary: analysis.summary,
        percentage_change: analysis.percentage_change,
        alerts: analysis.alerts,
    }
}

pub fn to_wire_statistics(summary: LedgerSummary) -> shared::StatisticsResponse {
    shared::StatisticsResponse {
        total_balance: summary.total_balance,
        income_total: summary.income_total,
        expense_total: summary.expense_total,
        category_totals: summary
            .category_totals
            .into_iter()
            .map(|(category, total)| shared::CategoryTotal { category, total })
            .collect(),
        monthly: summary
            .monthly
            .into_iter()
            .map(|flow| shared::MonthlyFlow {
                month: flow.month,
                income: flow.income,
                expense: flow.expense,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;

    #[test]
    fn wire_user_omits_the_password() {
        let user = User {
            id: "u1".to_string(),
            email: "lena@example.com".to_string(),
            name: "Lena".to_string(),
            role: Role::User,
            is_active: true,
            password: "secret".to_string(),
        };
        let wire = to_wire_user(user);
        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "lena@example.com");
    }

    #[test]
    fn statistics_map_category_fold_into_pairs() {
        let mut category_totals = std::collections::BTreeMap::new();
        category_totals.insert("Food".to_string(), 200.0);
        let summary = LedgerSummary {
            total_balance: 1000.0,
            income_total: 2000.0,
            expense_total: 200.0,
            category_totals,
            monthly: Vec::new(),
        };
        let wire = to_wire_statistics(summary);
        assert_eq!(
            wire.category_totals,
            vec![shared::CategoryTotal {
                category: "Food".to_string(),
                total: 200.0
            }]
        );
    }
}
