use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The identity attributed to writes for the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    /// True for anonymous identities, false for token-based ones.
    pub anonymous: bool,
    pub created_at: NaiveDateTime,
}
