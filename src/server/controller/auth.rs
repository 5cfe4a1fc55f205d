use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::{user_dto, AuthService},
    },
};

/// OpenAPI tag for identity routes.
pub static AUTH_TAG: &str = "auth";

/// Request body for identity resolution.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SessionRequestDto {
    /// Pre-issued login token; omit for an anonymous identity.
    pub token: Option<String>,
}

/// Resolve-or-create the identity for this session
///
/// With a token, validates it and maps to the user with the token's subject
/// (created on first sight). Without one, creates a fresh anonymous user.
/// The resolved user ID is stored in the session and attributed to writes.
#[utoipa::path(
    post,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    request_body = SessionRequestDto,
    responses(
        (status = 200, description = "Identity resolved for this session", body = UserDto),
        (status = 401, description = "Login token rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SessionRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, state.auth_token_secret.as_deref());

    let user = auth_service.resolve_identity(body.token.as_deref()).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user_dto(&user))).into_response())
}

/// Get the identity currently attributed to this session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Active identity for this session", body = UserDto),
        (status = 404, description = "No identity established", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "No identity established".to_string(),
            }),
        )
            .into_response()
    };

    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(not_found());
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        // Stale session pointing at a deleted user; clear so the client
        // re-resolves a fresh identity.
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session, client will re-resolve",
            user_id
        );

        return Ok(not_found());
    };

    Ok((StatusCode::OK, Json(user_dto(&user))).into_response())
}

/// Discard the identity for this session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear when an identity is actually present; clearing a session
    // that does not exist errors in the session layer.
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}
