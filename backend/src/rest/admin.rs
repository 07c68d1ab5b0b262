//! User administration endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{CreateUserRequest, ResetPasswordRequest, SetUserActiveRequest, UserListResponse};
use tracing::info;

use crate::domain::commands::users::{
    CreateUserCommand, DeleteUserCommand, ResetPasswordCommand, SetUserActiveCommand,
};

use super::mappers::{from_wire_role, to_wire_user};
use super::{run_user, user_error_response, AppState};

pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/admin/users");

    let service = state.user_service.clone();
    match run_user(move || service.list_users()).await {
        Ok(users) => (
            StatusCode::OK,
            Json(UserListResponse {
                users: users.into_iter().map(to_wire_user).collect(),
            }),
        )
            .into_response(),
        Err(error) => user_error_response(error),
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    info!("POST /api/admin/users - email: {}", request.email);

    let command = CreateUserCommand {
        email: request.email,
        name: request.name,
        password: request.password,
        role: from_wire_role(request.role),
    };
    let service = state.user_service.clone();
    match run_user(move || service.create_user(command)).await {
        Ok(user) => (StatusCode::CREATED, Json(to_wire_user(user))).into_response(),
        Err(error) => user_error_response(error),
    }
}

pub async fn set_user_active(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<SetUserActiveRequest>,
) -> impl IntoResponse {
    info!("PUT /api/admin/users/{user_id}/active -> {}", request.is_active);

    let command = SetUserActiveCommand {
        user_id,
        is_active: request.is_active,
    };
    let service = state.user_service.clone();
    match run_user(move || service.set_user_active(command)).await {
        Ok(user) => (StatusCode::OK, Json(to_wire_user(user))).into_response(),
        Err(error) => user_error_response(error),
    }
}

pub async fn reset_password(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> impl IntoResponse {
    info!("PUT /api/admin/users/{user_id}/password");

    let command = ResetPasswordCommand {
        user_id,
        new_password: request.password,
    };
    let service = state.user_service.clone();
    match run_user(move || service.reset_password(command)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => user_error_response(error),
    }
}

/// Identifies the admin performing the delete, for the self-delete guard.
#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    pub acting_user_id: String,
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<DeleteUserQuery>,
) -> impl IntoResponse {
    info!("DELETE /api/admin/users/{user_id}");

    let command = DeleteUserCommand {
        user_id,
        acting_user_id: query.acting_user_id,
    };
    let service = state.user_service.clone();
    match run_user(move || service.delete_user(command)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => user_error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::test_state;
    use shared::{Role, User};

    async fn create(state: &AppState, email: &str) -> User {
        let response = create_user(
            State(state.clone()),
            Json(CreateUserRequest {
                email: email.to_string(),
                name: "Member".to_string(),
                password: "pw".to_string(),
                role: Role::User,
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

    #[tokio::test]
    async fn create_and_list_users() {
        let (state, _tmp) = test_state();
        state.user_service.seed_master_admin().unwrap();
        create(&state, "lena@example.com").await;

        let response = list_users(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: UserListResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.users.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_unprocessable() {
        let (state, _tmp) = test_state();
        create(&state, "lena@example.com").await;

        let response = create_user(
            State(state),
            Json(CreateUserRequest {
                email: "LENA@example.com".to_string(),
                name: "Dup".to_string(),
                password: "pw".to_string(),
                role: Role::User,
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn self_delete_is_a_conflict() {
        let (state, _tmp) = test_state();
        state.user_service.seed_master_admin().unwrap();

        let response = delete_user(
            State(state),
            Path("master-root".to_string()),
            Query(DeleteUserQuery {
                acting_user_id: "master-root".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn suspend_then_reactivate() {
        let (state, _tmp) = test_state();
        let member = create(&state, "lena@example.com").await;

        let response = set_user_active(
            State(state.clone()),
            Path(member.id.clone()),
            Json(SetUserActiveRequest { is_active: false }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: User = serde_json::from_slice(&body).unwrap();
        assert!(!updated.is_active);

        let response = set_user_active(
            State(state),
            Path(member.id),
            Json(SetUserActiveRequest { is_active: true }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
