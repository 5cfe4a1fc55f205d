use axum::{extract::State, http::StatusCode, response::IntoResponse};
use podium::server::{controller::champion::list_champions, error::Error, model::app::AppState};

use crate::util::setup::{create_champion, create_user, test_setup};

#[tokio::test]
/// Expect 200 with an empty list for an empty collection
async fn returns_empty_collection() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();

    let result = list_champions(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 with every record; reads require no identity
async fn returns_all_records() -> Result<(), Error> {
    let test = test_setup().await;
    let user = create_user(&test).await?;
    create_champion(&test, "Indonesia Open", "2024-06-09", "An Se-young", user.id).await?;
    create_champion(&test, "Denmark Open", "2023-10-22", "Viktor Axelsen", user.id).await?;

    let state: AppState = test.state();
    let result = list_champions(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), Error> {
    let test = podium_test_utils::TestBuilder::new()
        .build()
        .await
        .expect("failed to build test environment");

    let state: AppState = test.state();
    let result = list_champions(State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
