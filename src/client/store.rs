use crate::model::user::UserDto;

/// Client-side identity state shared through context.
///
/// `fetched` distinguishes "still resolving" from "resolved with no
/// identity"; the snapshot subscription and all writes are gated on `user`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn resolved(user: Option<UserDto>) -> Self {
        Self {
            user,
            fetched: true,
        }
    }

    /// True once resolution settled with a live identity; the snapshot
    /// subscription and all writes require this.
    pub fn has_identity(&self) -> bool {
        self.fetched && self.user.is_some()
    }
}
