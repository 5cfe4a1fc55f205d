use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, champion::MAX_IMAGE_BYTES};

/// Champion record validation and lookup errors.
#[derive(Error, Debug)]
pub enum ChampionError {
    /// A required free-text field was submitted empty.
    #[error("Required field {0:?} is empty")]
    MissingField(&'static str),
    /// The submitted date is not a parseable ISO date.
    #[error("Date {0:?} is not a valid YYYY-MM-DD date")]
    MalformedDate(String),
    /// The inline image payload is not valid base64.
    #[error("Image payload is not a valid inline-encoded image")]
    MalformedImage,
    /// The attached image exceeds the size cap.
    #[error("Image of {size} bytes exceeds the {MAX_IMAGE_BYTES} byte cap")]
    OversizedImage { size: usize },
    /// No champion record exists with the given ID.
    #[error("Champion record {0} not found")]
    NotFound(i32),
}

impl IntoResponse for ChampionError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_) | Self::MalformedDate(_) | Self::MalformedImage => {
                StatusCode::BAD_REQUEST
            }
            Self::OversizedImage { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
