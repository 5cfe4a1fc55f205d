//! Error types for the Podium server application.
//!
//! Domain-specific error enums (identity, champion records, configuration) are
//! aggregated into a single [`Error`] type via `thiserror` `#[from]`
//! conversions. Every error implements `IntoResponse`; anything without a
//! specific mapping falls back to a logged 500 with a generic body, so no
//! failure is ever fatal to the process.

pub mod auth;
pub mod champion;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, champion::ChampionError, config::ConfigError},
};

/// Main error type for the Podium server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Identity error (session, token validation, unknown user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Champion record error (validation, image cap, unknown record).
    #[error(transparent)]
    ChampionError(#[from] ChampionError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Maps errors to HTTP responses.
///
/// Validation failures map to 4xx responses with a JSON body; everything else
/// is treated as a write/infrastructure failure and degrades to a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ChampionError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for podium_test_utils::TestError {
    fn from(err: Error) -> Self {
        podium_test_utils::TestError::Other(Box::new(err))
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for diagnostics but returns a generic message to the
/// client so implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
