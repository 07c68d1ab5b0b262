//! REST surface. Handlers translate between the shared wire DTOs and
//! the domain services held in [`AppState`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;

use crate::domain::errors::{LedgerError, UserError};
use crate::domain::insight_service::InsightProvider;
use crate::domain::{
    AccountService, InsightService, LedgerPolicy, LedgerService, StatisticsService, UserService,
};
use crate::storage::json::{JsonConnection, LedgerRepository, UserRepository};

pub mod accounts;
pub mod admin;
pub mod auth;
pub mod insights;
pub mod mappers;
pub mod statistics;
pub mod transactions;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger_service: Arc<LedgerService>,
    pub account_service: Arc<AccountService>,
    pub statistics_service: Arc<StatisticsService>,
    pub insight_service: Arc<InsightService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire every service to the JSON store rooted at `connection`.
    pub fn new(connection: Arc<JsonConnection>, provider: Arc<dyn InsightProvider>) -> Self {
        let ledger_store = Arc::new(LedgerRepository::new(connection.clone()));
        let user_store = Arc::new(UserRepository::new(connection));
        Self {
            ledger_service: Arc::new(LedgerService::new(
                ledger_store.clone(),
                LedgerPolicy::default(),
            )),
            account_service: Arc::new(AccountService::new(ledger_store.clone())),
            statistics_service: Arc::new(StatisticsService::new(ledger_store.clone())),
            insight_service: Arc::new(InsightService::new(ledger_store, provider)),
            user_service: Arc::new(UserService::new(user_store)),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .route(
            "/users/:user_id/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/users/:user_id/transactions/:transaction_id",
            put(transactions::update_transaction).delete(transactions::delete_transaction),
        )
        .route(
            "/users/:user_id/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/users/:user_id/accounts/:account_id",
            delete(accounts::delete_account),
        )
        .route("/users/:user_id/statistics", get(statistics::get_statistics))
        .route("/users/:user_id/insights", post(insights::analyze))
        .route(
            "/admin/users",
            get(admin::list_users).post(admin::create_user),
        )
        .route("/admin/users/:user_id/active", put(admin::set_user_active))
        .route("/admin/users/:user_id/password", put(admin::reset_password))
        .route("/admin/users/:user_id", delete(admin::delete_user));

    Router::new().nest("/api", api).with_state(state)
}

/// Run a synchronous ledger/account/statistics call on the blocking
/// pool. The services do filesystem I/O on every operation, which must
/// not stall the async runtime.
pub(crate) async fn run_ledger<T, F>(task: F) -> Result<T, LedgerError>
where
    F: FnOnce() -> Result<T, LedgerError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|join| LedgerError::Storage(anyhow::anyhow!("blocking task failed: {join}")))?
}

/// Same as [`run_ledger`] for the user service.
pub(crate) async fn run_user<T, F>(task: F) -> Result<T, UserError>
where
    F: FnOnce() -> Result<T, UserError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|join| UserError::Storage(anyhow::anyhow!("blocking task failed: {join}")))?
}

/// Map a ledger error to its HTTP response. Validation and unknown
/// account references are client errors on an otherwise healthy system;
/// only storage failures surface as 500.
pub(crate) fn ledger_error_response(error: LedgerError) -> Response {
    match &error {
        LedgerError::Validation(_) | LedgerError::UnknownAccount(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
        LedgerError::TransactionNotFound(_) | LedgerError::AccountNotFound(_) => {
            (StatusCode::NOT_FOUND, error.to_string()).into_response()
        }
        LedgerError::Storage(inner) => {
            tracing::error!("storage failure: {inner:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "storage failure").into_response()
        }
    }
}

pub(crate) fn user_error_response(error: UserError) -> Response {
    match &error {
        UserError::InvalidCredentials | UserError::AccountSuspended => {
            (StatusCode::UNAUTHORIZED, error.to_string()).into_response()
        }
        UserError::Validation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
        UserError::NotFound(_) => (StatusCode::NOT_FOUND, error.to_string()).into_response(),
        UserError::CannotDeleteSelf => {
            (StatusCode::CONFLICT, error.to_string()).into_response()
        }
        UserError::Storage(inner) => {
            tracing::error!("storage failure: {inner:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "storage failure").into_response()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::insight_service::AiAnalysis;
    use anyhow::Result;
    use async_trait::async_trait;

    pub struct StubProvider;

    #[async_trait]
    impl InsightProvider for StubProvider {
        async fn analyze(
            &self,
            _transactions: &[crate::domain::models::Transaction],
        ) -> Result<AiAnalysis> {
            Ok(AiAnalysis {
                summary: "stub".to_string(),
                percentage_change: 0.0,
                alerts: Vec::new(),
            })
        }
    }

    /// State backed by a fresh temp directory. Keep the TempDir alive
    /// for the duration of the test.
    pub fn test_state() -> (AppState, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        (AppState::new(connection, Arc::new(StubProvider)), temp_dir)
    }
}
