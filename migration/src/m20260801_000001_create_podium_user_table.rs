use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_SUBJECT: &str = "idx_podium_user_subject";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PodiumUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PodiumUser::Id))
                    .col(string_null(PodiumUser::Subject))
                    .col(timestamp(PodiumUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_SUBJECT)
                    .table(PodiumUser::Table)
                    .col(PodiumUser::Subject)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_SUBJECT)
                    .table(PodiumUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PodiumUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PodiumUser {
    Table,
    Id,
    Subject,
    CreatedAt,
}
