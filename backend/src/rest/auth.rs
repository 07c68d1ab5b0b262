//! Login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::{LoginRequest, LoginResponse};
use tracing::info;

use crate::domain::commands::users::AuthenticateCommand;

use super::mappers::to_wire_user;
use super::{run_user, user_error_response, AppState};

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - email: {}", request.email);

    let command = AuthenticateCommand {
        email: request.email,
        password: request.password,
    };
    let service = state.user_service.clone();
    match run_user(move || service.authenticate(command)).await {
        Ok(user) => (
            StatusCode::OK,
            Json(LoginResponse {
                user: to_wire_user(user),
            }),
        )
            .into_response(),
        Err(error) => user_error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::users::SetUserActiveCommand;
    use crate::rest::test_support::test_state;

    #[tokio::test]
    async fn master_admin_can_log_in() {
        let (state, _tmp) = test_state();
        state.user_service.seed_master_admin().unwrap();

        let response = login(
            State(state),
            Json(LoginRequest {
                email: " Admin@Nexo.com ".to_string(),
                password: "admin".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: LoginResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.user.id, "master-root");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (state, _tmp) = test_state();
        state.user_service.seed_master_admin().unwrap();

        let response = login(
            State(state),
            Json(LoginRequest {
                email: "admin@nexo.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn suspended_user_is_unauthorized() {
        let (state, _tmp) = test_state();
        state.user_service.seed_master_admin().unwrap();
        state
            .user_service
            .set_user_active(SetUserActiveCommand {
                user_id: "master-root".to_string(),
                is_active: false,
            })
            .unwrap();

        let response = login(
            State(state),
            Json(LoginRequest {
                email: "admin@nexo.com".to_string(),
                password: "admin".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
