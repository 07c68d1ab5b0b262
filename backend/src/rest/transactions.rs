//! Handlers for `/api/users/:user_id/transactions`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{TransactionInput, TransactionListResponse};
use tracing::info;

use crate::domain::commands::transactions::{
    CreateTransactionCommand, DeleteTransactionCommand, UpdateTransactionCommand,
};

use super::mappers::{to_transaction_values, to_wire_transaction};
use super::{ledger_error_response, run_ledger, AppState};

pub async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{user_id}/transactions");

    let service = state.ledger_service.clone();
    match run_ledger(move || service.list_transactions(&user_id)).await {
        Ok(transactions) => {
            let response = TransactionListResponse {
                transactions: transactions.into_iter().map(to_wire_transaction).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => ledger_error_response(error),
    }
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(input): Json<TransactionInput>,
) -> impl IntoResponse {
    info!("POST /api/users/{user_id}/transactions");

    let command = CreateTransactionCommand {
        values: to_transaction_values(input),
    };
    let service = state.ledger_service.clone();
    match run_ledger(move || service.create_transaction(&user_id, command)).await {
        Ok(transaction) => {
            (StatusCode::CREATED, Json(to_wire_transaction(transaction))).into_response()
        }
        Err(error) => ledger_error_response(error),
    }
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(String, String)>,
    Json(input): Json<TransactionInput>,
) -> impl IntoResponse {
    info!("PUT /api/users/{user_id}/transactions/{transaction_id}");

    let command = UpdateTransactionCommand {
        transaction_id,
        values: to_transaction_values(input),
    };
    let service = state.ledger_service.clone();
    match run_ledger(move || service.update_transaction(&user_id, command)).await {
        Ok(transaction) => {
            (StatusCode::OK, Json(to_wire_transaction(transaction))).into_response()
        }
        Err(error) => ledger_error_response(error),
    }
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path((user_id, transaction_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/users/{user_id}/transactions/{transaction_id}");

    let command = DeleteTransactionCommand { transaction_id };
    let service = state.ledger_service.clone();
    match run_ledger(move || service.delete_transaction(&user_id, command)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => ledger_error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::accounts;
    use crate::rest::test_support::test_state;
    use chrono::NaiveDate;
    use shared::{BankAccount, CreateAccountRequest, Transaction, TransactionKind};

    async fn seed_account(state: &AppState, balance: f64) -> BankAccount {
        let response = accounts::create_account(
            State(state.clone()),
            Path("user-1".to_string()),
            Json(CreateAccountRequest {
                name: "Checking".to_string(),
                initial_balance: balance,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn input(amount: f64, account_id: Option<String>) -> TransactionInput {
        TransactionInput {
            amount,
            kind: TransactionKind::Expense,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            description: String::new(),
            account_id,
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let (state, _tmp) = test_state();
        let account = seed_account(&state, 100.0).await;

        let created = create_transaction(
            State(state.clone()),
            Path("user-1".to_string()),
            Json(input(25.0, Some(account.id))),
        )
        .await
        .into_response();
        assert_eq!(created.status(), StatusCode::CREATED);

        let listed = list_transactions(State(state), Path("user-1".to_string()))
            .await
            .into_response();
        assert_eq!(listed.status(), StatusCode::OK);
        let body = axum::body::to_bytes(listed.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: TransactionListResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].amount, 25.0);
    }

    #[tokio::test]
    async fn invalid_amount_is_unprocessable() {
        let (state, _tmp) = test_state();
        let account = seed_account(&state, 100.0).await;

        let response = create_transaction(
            State(state),
            Path("user-1".to_string()),
            Json(input(-5.0, Some(account.id))),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_account_reference_is_unprocessable() {
        let (state, _tmp) = test_state();
        let response = create_transaction(
            State(state),
            Path("user-1".to_string()),
            Json(input(5.0, Some("no-such-account".to_string()))),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_transaction_are_not_found() {
        let (state, _tmp) = test_state();
        let account = seed_account(&state, 100.0).await;

        let response = update_transaction(
            State(state.clone()),
            Path(("user-1".to_string(), "missing".to_string())),
            Json(input(5.0, Some(account.id))),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = delete_transaction(
            State(state),
            Path(("user-1".to_string(), "missing".to_string())),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_no_content() {
        let (state, _tmp) = test_state();
        let account = seed_account(&state, 100.0).await;

        let created = create_transaction(
            State(state.clone()),
            Path("user-1".to_string()),
            Json(input(10.0, Some(account.id))),
        )
        .await
        .into_response();
        let body = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let transaction: Transaction = serde_json::from_slice(&body).unwrap();

        let deleted = delete_transaction(
            State(state),
            Path(("user-1".to_string(), transaction.id)),
        )
        .await
        .into_response();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    }
}
