use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Configuration errors raised while reading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is present but unusable.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
