use axum::{extract::State, http::StatusCode, response::IntoResponse};
use podium::server::{
    controller::auth::get_session,
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
};

use crate::util::setup::{create_user, test_setup};

#[tokio::test]
/// Expect 404 not found when no identity was established for this session
async fn returns_not_found_without_identity() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = get_session(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the active identity for an established session
async fn returns_identity_for_active_session() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = get_session(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the session points at a deleted user
async fn clears_stale_session_for_missing_user() -> Result<(), Error> {
    let test = test_setup().await;
    SessionUserId::insert(&test.session, 99).await?;

    let state: AppState = test.state();
    let result = get_session(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The stale binding is dropped so the client can re-resolve
    let user_id = SessionUserId::get(&test.session).await?;
    assert!(user_id.is_none());

    Ok(())
}
