use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use podium::server::{
    controller::auth::{create_session, SessionRequestDto},
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
};
use podium_test_utils::{constant::TEST_AUTH_TOKEN_SECRET, fixtures::auth::mint_token};
use sea_orm::EntityTrait;

use crate::util::setup::{state_with_secret, test_setup};

#[tokio::test]
/// Expect 200 with an anonymous identity when no token is supplied
async fn returns_anonymous_identity_without_token() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = create_session(
        State(state),
        test.session.clone(),
        Json(SessionRequestDto { token: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    // The resolved identity is bound to the session for later writes
    let user_id = SessionUserId::get(&test.session).await?;
    assert!(user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 200 with a subject-bound identity for a valid token
async fn returns_identity_for_valid_token() -> Result<(), Error> {
    let test = test_setup().await;
    let state = state_with_secret(&test);
    let token = mint_token(TEST_AUTH_TOKEN_SECRET, "player-1").expect("failed to mint token");

    let result = create_session(
        State(state),
        test.session.clone(),
        Json(SessionRequestDto { token: Some(token) }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let users = entity::prelude::PodiumUser::find().all(&test.state.db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].subject.as_deref(), Some("player-1"));

    Ok(())
}

#[tokio::test]
/// Expect a single user row when the same token subject resolves twice
async fn reuses_user_for_repeated_token_resolution() -> Result<(), Error> {
    let test = test_setup().await;
    let token = mint_token(TEST_AUTH_TOKEN_SECRET, "player-1").expect("failed to mint token");

    for _ in 0..2 {
        let result = create_session(
            State(state_with_secret(&test)),
            test.session.clone(),
            Json(SessionRequestDto {
                token: Some(token.clone()),
            }),
        )
        .await;
        assert!(result.is_ok());
    }

    let users = entity::prelude::PodiumUser::find().all(&test.state.db).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a token signed with a different secret
async fn returns_unauthorized_for_invalid_token() -> Result<(), Error> {
    let test = test_setup().await;
    let state = state_with_secret(&test);
    let token = mint_token("some_other_secret", "player-1").expect("failed to mint token");

    let result = create_session(
        State(state),
        test.session.clone(),
        Json(SessionRequestDto { token: Some(token) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a token when no secret is configured
async fn returns_unauthorized_when_token_login_not_configured() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let token = mint_token(TEST_AUTH_TOKEN_SECRET, "player-1").expect("failed to mint token");

    let result = create_session(
        State(state),
        test.session.clone(),
        Json(SessionRequestDto { token: Some(token) }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
