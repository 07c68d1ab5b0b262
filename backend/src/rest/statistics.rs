//! Dashboard statistics endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::mappers::to_wire_statistics;
use super::{ledger_error_response, run_ledger, AppState};

pub async fn get_statistics(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{user_id}/statistics");

    let service = state.statistics_service.clone();
    match run_ledger(move || service.summary(&user_id)).await {
        Ok(summary) => (StatusCode::OK, Json(to_wire_statistics(summary))).into_response(),
        Err(error) => ledger_error_response(error),
    }
}
