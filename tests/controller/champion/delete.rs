use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use podium::server::{
    controller::champion::delete_champion,
    error::Error,
    model::{app::AppState, session::user::SessionUserId},
};
use sea_orm::EntityTrait;

use crate::util::setup::{create_champion, create_user, test_setup};

#[tokio::test]
/// Expect 401 unauthorized when no identity was established
async fn returns_unauthorized_without_identity() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = delete_champion(State(state), test.session.clone(), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 204 no content and the record gone after deletion
async fn deletes_existing_record() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    let champion =
        create_champion(&test, "French Open", "2024-03-10", "Lee Zii Jia", user.id).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = delete_champion(State(state), test.session.clone(), Path(champion.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::Champion::find_by_id(champion.id)
        .one(&test.state.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when deleting a record that does not exist
async fn returns_not_found_for_nonexistent_record() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    SessionUserId::insert(&test.session, user.id).await?;

    let state: AppState = test.state();
    let result = delete_champion(State(state), test.session.clone(), Path(99)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
