use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::model::champion::ChampionDto;

/// Buffered snapshots held per lagging subscriber before they drop behind.
const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

/// Shared state injected into every handler.
///
/// Owns the backend handles with explicit lifecycle: constructed once at
/// startup, cloned per request. The snapshot channel carries the full record
/// set after every successful write; subscription lifetime is scoped to the
/// receiver.
#[derive(Clone)]
pub struct AppState {
    /// Database connection backing the champion record store.
    pub db: DatabaseConnection,
    /// Publisher for full-collection snapshots pushed to live subscribers.
    pub snapshots: broadcast::Sender<Vec<ChampionDto>>,
    /// Shared secret for pre-issued login tokens, when configured.
    pub auth_token_secret: Option<String>,
}

impl AppState {
    /// Creates application state with a fresh snapshot channel.
    pub fn new(db: DatabaseConnection, auth_token_secret: Option<String>) -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);

        Self {
            db,
            snapshots,
            auth_token_secret,
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, None)
    }
}
