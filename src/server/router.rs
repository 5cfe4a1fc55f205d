//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/auth/session` - Resolve-or-create the session identity
/// - `GET  /api/auth/session` - Get the current session identity
/// - `GET  /api/auth/logout` - Discard the session identity
/// - `GET  /api/champions` - Full snapshot of the champion collection
/// - `GET  /api/champions/events` - SSE stream of collection snapshots
/// - `POST /api/champions` - Insert a champion record
/// - `PUT  /api/champions/{id}` - Overwrite a champion record
/// - `DELETE /api/champions/{id}` - Delete a champion record
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Podium", description = "Podium API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Identity API routes"),
        (name = controller::champion::CHAMPION_TAG, description = "Champion record API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::create_session))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::champion::list_champions))
        .routes(routes!(controller::champion::champion_events))
        .routes(routes!(controller::champion::create_champion))
        .routes(routes!(controller::champion::update_champion))
        .routes(routes!(controller::champion::delete_champion))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
