//! Shared DTO types exchanged between the Nexo backend and its clients.
//!
//! These are the wire representations only; domain models live in the
//! backend crate and are mapped at the REST boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// ID of the user who owns this transaction
    pub user_id: String,
    /// Positive magnitude in currency units
    pub amount: f64,
    pub kind: TransactionKind,
    /// Free-form category label (suggested sets below are not enforced)
    pub category: String,
    /// Calendar date the transaction is attributed to
    pub date: NaiveDate,
    /// Optional free text
    pub description: String,
    /// Linked bank account, if any
    pub account_id: Option<String>,
}

/// A bank account with its running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub user_id: String,
    /// Institution / account label
    pub name: String,
    /// Mutated only by the ledger engine after creation
    pub balance: f64,
}

/// User role for access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

/// An application user as exposed to clients. The stored password never
/// leaves the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
}

/// Result of the AI spending analysis, or its static fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub summary: String,
    /// Spending change vs. the previous month, in percent
    pub percentage_change: f64,
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Payload for creating a transaction or replacing an existing one's
/// values. Updates use the same shape; per-field patches are not
/// supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub initial_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<BankAccount>,
}

/// Income/expense flow for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    /// 1-based month number
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    /// Sum of all account balances
    pub total_balance: f64,
    pub income_total: f64,
    pub expense_total: f64,
    /// Expense totals per category label
    pub category_totals: Vec<CategoryTotal>,
    /// Twelve entries, January through December
    pub monthly: Vec<MonthlyFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetUserActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// Suggested category labels per transaction kind. Clients may offer
/// these in pickers; the backend accepts any label.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Rent",
    "Food",
    "Transport",
    "Leisure",
    "Health",
    "Education",
    "Subscriptions",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Gifts",
    "Sales",
    "Other",
];
