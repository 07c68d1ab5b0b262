//! AI insight endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::mappers::to_wire_analysis;
use super::{ledger_error_response, AppState};

pub async fn analyze(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/users/{user_id}/insights");

    match state.insight_service.analyze(&user_id).await {
        Ok(analysis) => (StatusCode::OK, Json(to_wire_analysis(analysis))).into_response(),
        Err(error) => ledger_error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::test_state;
    use shared::AiAnalysis;

    #[tokio::test]
    async fn analyze_always_returns_an_analysis() {
        let (state, _tmp) = test_state();
        let response = analyze(State(state), Path("user-1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let analysis: AiAnalysis = serde_json::from_slice(&body).unwrap();
        assert_eq!(analysis.summary, "stub");
    }
}
