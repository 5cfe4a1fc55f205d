use base64::Engine;
use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::{
    model::champion::{ChampionDto, ChampionForm, MAX_IMAGE_BYTES},
    server::{data::champion::ChampionRepository, error::champion::ChampionError, error::Error},
};

/// Service for champion record operations.
///
/// Every successful write is followed by a push of the complete collection to
/// the snapshot channel; subscribers replace their local set wholesale, so no
/// incremental patching exists anywhere.
pub struct ChampionService<'a> {
    db: &'a DatabaseConnection,
    snapshots: &'a broadcast::Sender<Vec<ChampionDto>>,
}

impl<'a> ChampionService<'a> {
    /// Creates a new instance of [`ChampionService`]
    pub fn new(
        db: &'a DatabaseConnection,
        snapshots: &'a broadcast::Sender<Vec<ChampionDto>>,
    ) -> Self {
        Self { db, snapshots }
    }

    /// Returns the current full snapshot of the collection.
    ///
    /// Rows that fail boundary coercion (unparseable date) are flagged and
    /// dropped rather than propagated; an unknown category coerces to the
    /// default tier.
    pub async fn list(&self) -> Result<Vec<ChampionDto>, Error> {
        let rows = ChampionRepository::new(self.db).list().await?;

        let champions = rows.into_iter().filter_map(coerce_row).collect();

        Ok(champions)
    }

    /// Validates and inserts a new record attributed to `created_by`.
    pub async fn create(
        &self,
        form: &ChampionForm,
        created_by: i32,
    ) -> Result<ChampionDto, Error> {
        validate_form(form)?;

        let row = ChampionRepository::new(self.db).create(form, created_by).await?;
        let champion = coerce_row(row)
            .ok_or_else(|| Error::ParseError("inserted champion row failed coercion".to_string()))?;

        self.publish_snapshot().await;

        Ok(champion)
    }

    /// Validates and overwrites an existing record's mutable fields.
    pub async fn update(&self, id: i32, form: &ChampionForm) -> Result<ChampionDto, Error> {
        validate_form(form)?;

        let row = ChampionRepository::new(self.db)
            .update(id, form)
            .await?
            .ok_or(ChampionError::NotFound(id))?;
        let champion = coerce_row(row)
            .ok_or_else(|| Error::ParseError("updated champion row failed coercion".to_string()))?;

        self.publish_snapshot().await;

        Ok(champion)
    }

    /// Deletes a record.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ChampionRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(ChampionError::NotFound(id).into());
        }

        self.publish_snapshot().await;

        Ok(())
    }

    /// Pushes the current full collection to all live subscribers.
    ///
    /// A publish failure never fails the originating write; subscribers with
    /// no receiver simply miss the notification.
    async fn publish_snapshot(&self) {
        match self.list().await {
            Ok(snapshot) => {
                let _ = self.snapshots.send(snapshot);
            }
            Err(err) => {
                tracing::error!("Failed to load snapshot for subscribers: {err}");
            }
        }
    }
}

/// Coerces a raw store row into the strict record shape.
fn coerce_row(row: entity::champion::Model) -> Option<ChampionDto> {
    let date = match NaiveDate::parse_from_str(&row.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            tracing::warn!(
                champion_id = row.id,
                date = %row.date,
                "Dropping champion row with unparseable date from snapshot"
            );
            return None;
        }
    };

    let category = row.category.parse().unwrap_or_else(|_| {
        tracing::warn!(
            champion_id = row.id,
            category = %row.category,
            "Coercing unknown category to default tier"
        );
        Default::default()
    });

    Some(ChampionDto {
        id: row.id,
        tournament: row.tournament,
        date,
        winner: row.winner,
        category,
        image: row.image,
        created_at: row.created_at,
        updated_at: row.updated_at,
        created_by: row.created_by,
    })
}

/// Validates a submission before any write reaches the store.
fn validate_form(form: &ChampionForm) -> Result<(), ChampionError> {
    if form.tournament.is_empty() {
        return Err(ChampionError::MissingField("tournament"));
    }
    if form.date.is_empty() {
        return Err(ChampionError::MissingField("date"));
    }
    if form.winner.is_empty() {
        return Err(ChampionError::MissingField("winner"));
    }

    if NaiveDate::parse_from_str(&form.date, "%Y-%m-%d").is_err() {
        return Err(ChampionError::MalformedDate(form.date.clone()));
    }

    if !form.image.is_empty() {
        let size = decoded_image_len(&form.image)?;
        if size > MAX_IMAGE_BYTES {
            return Err(ChampionError::OversizedImage { size });
        }
    }

    Ok(())
}

/// Decoded byte size of an inline image payload, with or without a data-URL
/// prefix.
fn decoded_image_len(payload: &str) -> Result<usize, ChampionError> {
    let encoded = payload
        .rsplit_once("base64,")
        .map(|(_, encoded)| encoded)
        .unwrap_or(payload);

    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map(|bytes| bytes.len())
        .map_err(|_| ChampionError::MalformedImage)
}
