use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Identity resolution errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A write was attempted without a live identity in the session.
    #[error("No identity present in session")]
    IdentityRequired,
    /// Session carries a user ID that no longer exists in the database.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// A pre-issued login token failed validation.
    #[error("Login token rejected: {0}")]
    InvalidToken(String),
    /// A login token was presented but no shared secret is configured.
    #[error("Token login attempted but AUTH_TOKEN_SECRET is not configured")]
    TokenLoginNotConfigured,
}

impl AuthError {
    fn sign_in_required() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Sign in required".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::IdentityRequired => {
                tracing::debug!("{}", Self::IdentityRequired);

                Self::sign_in_required()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidToken(_) => {
                tracing::warn!("{}", self);

                Self::sign_in_required()
            }
            Self::TokenLoginNotConfigured => {
                tracing::warn!("{}", self);

                Self::sign_in_required()
            }
        }
    }
}
