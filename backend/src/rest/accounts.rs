//! Handlers for `/api/users/:user_id/accounts`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{AccountListResponse, CreateAccountRequest};
use tracing::info;

use crate::domain::commands::accounts::{CreateAccountCommand, DeleteAccountCommand};

use super::mappers::to_wire_account;
use super::{ledger_error_response, run_ledger, AppState};

pub async fn list_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{user_id}/accounts");

    let service = state.account_service.clone();
    match run_ledger(move || service.list_accounts(&user_id)).await {
        Ok(accounts) => {
            let response = AccountListResponse {
                accounts: accounts.into_iter().map(to_wire_account).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => ledger_error_response(error),
    }
}

pub async fn create_account(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<CreateAccountRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/{user_id}/accounts - name: {}", request.name);

    let command = CreateAccountCommand {
        name: request.name,
        initial_balance: request.initial_balance,
    };
    let service = state.account_service.clone();
    match run_ledger(move || service.create_account(&user_id, command)).await {
        Ok(account) => (StatusCode::CREATED, Json(to_wire_account(account))).into_response(),
        Err(error) => ledger_error_response(error),
    }
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path((user_id, account_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/users/{user_id}/accounts/{account_id}");

    let command = DeleteAccountCommand { account_id };
    let service = state.account_service.clone();
    match run_ledger(move || service.delete_account(&user_id, command)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => ledger_error_response(error),
    }
}
