use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::model::champion::ChampionForm;

/// Repository for champion records.
///
/// Updates are full-field overwrites of the mutable fields, not patches; the
/// store keeps `id`, `created_at`, and `created_by` immutable after insert.
pub struct ChampionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionRepository<'a> {
    /// Creates a new instance of [`ChampionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the complete collection, unordered.
    pub async fn list(&self) -> Result<Vec<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find().all(self.db).await
    }

    /// Finds a single record by ID.
    pub async fn get(&self, id: i32) -> Result<Option<entity::champion::Model>, DbErr> {
        entity::prelude::Champion::find_by_id(id).one(self.db).await
    }

    /// Inserts a new record attributed to `created_by`.
    pub async fn create(
        &self,
        form: &ChampionForm,
        created_by: i32,
    ) -> Result<entity::champion::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let champion = entity::champion::ActiveModel {
            tournament: ActiveValue::Set(form.tournament.clone()),
            date: ActiveValue::Set(form.date.clone()),
            winner: ActiveValue::Set(form.winner.clone()),
            category: ActiveValue::Set(form.category.to_string()),
            image: ActiveValue::Set(form.image.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(created_by),
            ..Default::default()
        };

        champion.insert(self.db).await
    }

    /// Overwrites the mutable fields of an existing record and bumps
    /// `updated_at`. Returns `Ok(None)` when the record does not exist.
    pub async fn update(
        &self,
        id: i32,
        form: &ChampionForm,
    ) -> Result<Option<entity::champion::Model>, DbErr> {
        let champion = match entity::prelude::Champion::find_by_id(id).one(self.db).await? {
            Some(champion) => champion,
            None => return Ok(None),
        };

        let mut champion_am = champion.into_active_model();
        champion_am.tournament = ActiveValue::Set(form.tournament.clone());
        champion_am.date = ActiveValue::Set(form.date.clone());
        champion_am.winner = ActiveValue::Set(form.winner.clone());
        champion_am.category = ActiveValue::Set(form.category.to_string());
        champion_am.image = ActiveValue::Set(form.image.clone());
        champion_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let champion = champion_am.update(self.db).await?;

        Ok(Some(champion))
    }

    /// Deletes a record.
    ///
    /// Returns OK regardless of the record existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Champion::delete_by_id(id).exec(self.db).await
    }
}
