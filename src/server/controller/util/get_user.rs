use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId},
};

/// Retrieves the acting identity from session and database.
///
/// Writes are blocked entirely without a live identity, so this is the gate
/// every mutating handler goes through.
///
/// # Returns
/// - `Ok(Model)`: The identity attributed to the session
/// - `Err(Error::AuthError(AuthError::IdentityRequired))`: No identity in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Stale session; cleared
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::podium_user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::IdentityRequired));
    };

    let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
