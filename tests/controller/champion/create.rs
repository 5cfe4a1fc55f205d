use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use base64::Engine;
use podium::server::{
    controller::champion::create_champion,
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
};

use crate::util::setup::{champion_form, create_user, test_setup};

#[tokio::test]
/// Expect 401 unauthorized when no identity was established
async fn returns_unauthorized_without_identity() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = create_champion(
        State(state),
        test.session.clone(),
        Json(champion_form("All England Open", "2024-03-05", "Li Shifeng")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 201 created for a complete submission with a live identity
async fn creates_record_with_identity() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = create_champion(
        State(state),
        test.session.clone(),
        Json(champion_form("All England Open", "2024-03-05", "Li Shifeng")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when a required field is empty
async fn returns_bad_request_for_missing_field() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = create_champion(
        State(state),
        test.session.clone(),
        Json(champion_form("All England Open", "2024-03-05", "")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a date that is not ISO formatted
async fn returns_bad_request_for_malformed_date() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = create_champion(
        State(state),
        test.session.clone(),
        Json(champion_form("All England Open", "03/05/2024", "Li Shifeng")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 413 payload too large for an image over the size cap
async fn returns_payload_too_large_for_oversized_image() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let oversized = base64::engine::general_purpose::STANDARD
        .encode(vec![0u8; podium::model::champion::MAX_IMAGE_BYTES + 1]);
    let mut form = champion_form("All England Open", "2024-03-05", "Li Shifeng");
    form.image = format!("data:image/png;base64,{oversized}");

    let state: AppState = test.state();
    let result = create_champion(State(state), test.session.clone(), Json(form)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an image payload that does not decode
async fn returns_bad_request_for_undecodable_image() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let mut form = champion_form("All England Open", "2024-03-05", "Li Shifeng");
    form.image = "data:image/png;base64,@@not-base64@@".to_string();

    let state: AppState = test.state();
    let result = create_champion(State(state), test.session.clone(), Json(form)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
