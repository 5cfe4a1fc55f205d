pub use super::champion::Entity as Champion;
pub use super::podium_user::Entity as PodiumUser;
