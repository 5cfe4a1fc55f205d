use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_podium_user_table::PodiumUser;

static FK_CHAMPION_CREATED_BY: &str = "fk_champion_created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Champion::Table)
                    .if_not_exists()
                    .col(pk_auto(Champion::Id))
                    .col(string(Champion::Tournament))
                    .col(string(Champion::Date))
                    .col(string(Champion::Winner))
                    .col(string(Champion::Category))
                    .col(text(Champion::Image))
                    .col(timestamp(Champion::CreatedAt))
                    .col(timestamp(Champion::UpdatedAt))
                    .col(integer(Champion::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAMPION_CREATED_BY)
                    .from_tbl(Champion::Table)
                    .from_col(Champion::CreatedBy)
                    .to_tbl(PodiumUser::Table)
                    .to_col(PodiumUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAMPION_CREATED_BY)
                    .table(Champion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Champion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Champion {
    Table,
    Id,
    Tournament,
    Date,
    Winner,
    Category,
    Image,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
}
