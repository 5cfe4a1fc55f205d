//! HTTP controller endpoints for the Podium web API.
//!
//! Axum handlers for identity resolution and champion record CRUD, plus the
//! live snapshot stream. Controllers validate the session, delegate to
//! services, and map results to HTTP responses; they are documented with
//! utoipa for the OpenAPI surface at `/api/docs`.

pub mod auth;
pub mod champion;
pub mod util;
