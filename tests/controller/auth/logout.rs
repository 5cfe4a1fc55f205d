use axum::{http::StatusCode, response::IntoResponse};
use podium::server::{
    controller::auth::logout, error::Error, model::session::user::SessionUserId,
};

use crate::util::setup::test_setup;

#[tokio::test]
/// Expect 204 no content after logout with a user ID in session
async fn clears_session_with_identity() -> Result<(), Error> {
    let test = test_setup().await;
    SessionUserId::insert(&test.session, 1).await?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let user_id = SessionUserId::get(&test.session).await?;
    assert!(user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 no content even without session data
///
/// Clearing a session that was never written errors in the session layer, so
/// the endpoint only clears when an identity is actually present.
async fn succeeds_without_session_data() -> Result<(), Error> {
    let test = test_setup().await;

    let result = logout(test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
