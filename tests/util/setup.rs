//! Shared setup helpers for endpoint and service tests.

use chrono::Utc;
use podium::{
    model::champion::ChampionForm,
    server::{error::Error, model::app::AppState},
};
use podium_test_utils::{constant::TEST_AUTH_TOKEN_SECRET, TestBuilder, TestSetup};
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Test environment with the core tables created.
///
/// # Panics
/// Panics when the in-memory database cannot be initialized.
pub async fn test_setup() -> TestSetup {
    TestBuilder::new()
        .with_core_tables()
        .build()
        .await
        .expect("failed to build test environment")
}

/// Application state carrying the test token secret, for identity tests.
pub fn state_with_secret(test: &TestSetup) -> AppState {
    AppState::new(
        test.state.db.clone(),
        Some(TEST_AUTH_TOKEN_SECRET.to_string()),
    )
}

/// Insert an anonymous user to attribute writes to.
pub async fn create_user(test: &TestSetup) -> Result<entity::podium_user::Model, Error> {
    let user = entity::podium_user::ActiveModel {
        subject: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(&test.state.db).await?)
}

/// Insert a champion row with the default category and no image.
pub async fn create_champion(
    test: &TestSetup,
    tournament: &str,
    date: &str,
    winner: &str,
    created_by: i32,
) -> Result<entity::champion::Model, Error> {
    let now = Utc::now().naive_utc();

    let champion = entity::champion::ActiveModel {
        tournament: ActiveValue::Set(tournament.to_string()),
        date: ActiveValue::Set(date.to_string()),
        winner: ActiveValue::Set(winner.to_string()),
        category: ActiveValue::Set("Super 500".to_string()),
        image: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(created_by),
        ..Default::default()
    };

    Ok(champion.insert(&test.state.db).await?)
}

/// Complete submission form for a champion record.
pub fn champion_form(tournament: &str, date: &str, winner: &str) -> ChampionForm {
    ChampionForm {
        tournament: tournament.to_string(),
        date: date.to_string(),
        winner: winner.to_string(),
        ..Default::default()
    }
}
