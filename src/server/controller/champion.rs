use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use futures::stream::Stream;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        champion::{ChampionDto, ChampionForm},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::champion::ChampionService,
    },
};

/// OpenAPI tag for champion record routes.
pub static CHAMPION_TAG: &str = "champion";

/// Interval between SSE keep-alive comments.
const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

/// Get the full snapshot of the champion collection
#[utoipa::path(
    get,
    path = "/api/champions",
    tag = CHAMPION_TAG,
    responses(
        (status = 200, description = "Current full snapshot", body = Vec<ChampionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_champions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let champion_service = ChampionService::new(&state.db, &state.snapshots);

    let champions = champion_service.list().await?;

    Ok((StatusCode::OK, Json(champions)).into_response())
}

/// Subscribe to champion collection snapshots
///
/// Emits the current full snapshot on connect and again after every change to
/// the collection; subscribers replace their local record set wholesale on
/// each emission. The subscription ends when the client disconnects.
#[utoipa::path(
    get,
    path = "/api/champions/events",
    tag = CHAMPION_TAG,
    responses(
        (status = 200, description = "SSE stream of full collection snapshots"),
    ),
)]
pub async fn champion_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!("New subscriber connected to champion snapshots");

    let mut rx = state.snapshots.subscribe();

    let stream = async_stream::stream! {
        match ChampionService::new(&state.db, &state.snapshots).list().await {
            Ok(snapshot) => {
                if let Some(event) = snapshot_event(&snapshot) {
                    yield Ok(event);
                }
            }
            Err(err) => {
                // Degraded start: the subscriber stays connected and catches
                // up on the next change notification.
                tracing::error!("Failed to load initial snapshot for subscriber: {err}");
            }
        }

        loop {
            match rx.recv().await {
                Ok(snapshot) => {
                    if let Some(event) = snapshot_event(&snapshot) {
                        yield Ok(event);
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // Snapshots are full replacements, so only the newest one
                    // matters; keep receiving.
                    tracing::debug!("Subscriber lagged behind {skipped} snapshots");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::new().interval(SSE_KEEP_ALIVE).text("keep-alive"))
}

fn snapshot_event(snapshot: &[ChampionDto]) -> Option<Event> {
    match serde_json::to_string(snapshot) {
        Ok(json) => Some(Event::default().event("snapshot").data(json)),
        Err(err) => {
            tracing::warn!("Failed to serialize snapshot for subscriber: {err}");
            None
        }
    }
}

/// Insert a new champion record
///
/// Requires a live identity in the session; the record is attributed to it.
#[utoipa::path(
    post,
    path = "/api/champions",
    tag = CHAMPION_TAG,
    request_body = ChampionForm,
    responses(
        (status = 201, description = "Record created", body = ChampionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "No identity established", body = ErrorDto),
        (status = 413, description = "Image exceeds the size cap", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_champion(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<ChampionForm>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let champion_service = ChampionService::new(&state.db, &state.snapshots);
    let champion = champion_service.create(&form, user.id).await?;

    Ok((StatusCode::CREATED, Json(champion)).into_response())
}

/// Overwrite an existing champion record
///
/// Full-field overwrite of the mutable fields, not a patch; `id`,
/// `created_at`, and `created_by` are preserved. Last write wins when two
/// editors target the same record.
#[utoipa::path(
    put,
    path = "/api/champions/{id}",
    tag = CHAMPION_TAG,
    request_body = ChampionForm,
    params(("id" = i32, Path, description = "Champion record ID")),
    responses(
        (status = 200, description = "Record overwritten", body = ChampionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "No identity established", body = ErrorDto),
        (status = 404, description = "No record with this ID", body = ErrorDto),
        (status = 413, description = "Image exceeds the size cap", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_champion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(form): Json<ChampionForm>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let champion_service = ChampionService::new(&state.db, &state.snapshots);
    let champion = champion_service.update(id, &form).await?;

    Ok((StatusCode::OK, Json(champion)).into_response())
}

/// Delete a champion record
#[utoipa::path(
    delete,
    path = "/api/champions/{id}",
    tag = CHAMPION_TAG,
    params(("id" = i32, Path, description = "Champion record ID")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "No identity established", body = ErrorDto),
        (status = 404, description = "No record with this ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_champion(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let champion_service = ChampionService::new(&state.db, &state.snapshots);
    champion_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
