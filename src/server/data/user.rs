use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// Repository for identity records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user; `subject` is `None` for anonymous identities.
    pub async fn create(
        &self,
        subject: Option<String>,
    ) -> Result<entity::podium_user::Model, DbErr> {
        let user = entity::podium_user::ActiveModel {
            subject: ActiveValue::Set(subject),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds a user by ID.
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::podium_user::Model>, DbErr> {
        entity::prelude::PodiumUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by the external subject of a pre-issued token.
    pub async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<entity::podium_user::Model>, DbErr> {
        entity::prelude::PodiumUser::find()
            .filter(entity::podium_user::Column::Subject.eq(subject))
            .one(self.db)
            .await
    }
}
