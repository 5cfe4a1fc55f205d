use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use podium::server::{
    controller::champion::update_champion,
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
};
use sea_orm::EntityTrait;

use crate::util::setup::{champion_form, create_champion, create_user, test_setup};

#[tokio::test]
/// Expect 401 unauthorized when no identity was established
async fn returns_unauthorized_without_identity() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = update_champion(
        State(state),
        test.session.clone(),
        Path(1),
        Json(champion_form("Denmark Open", "2023-10-22", "Anders Antonsen")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the record overwritten in place, id preserved
async fn overwrites_existing_record() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    let champion = create_champion(&test, "Denmark Open", "2023-10-22", "Viktor Axelsen", user.id)
        .await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = update_champion(
        State(state),
        test.session.clone(),
        Path(champion.id),
        Json(champion_form("Denmark Open", "2023-10-22", "Anders Antonsen")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = entity::prelude::Champion::find_by_id(champion.id)
        .one(&test.state.db)
        .await?
        .expect("record should still exist");
    assert_eq!(stored.winner, "Anders Antonsen");
    assert_eq!(stored.created_by, user.id);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when updating a record that does not exist
async fn returns_not_found_for_nonexistent_record() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = update_champion(
        State(state),
        test.session.clone(),
        Path(99),
        Json(champion_form("Denmark Open", "2023-10-22", "Anders Antonsen")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
