use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "podium_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// External subject from a pre-issued token, `None` for anonymous identities.
    #[sea_orm(unique)]
    pub subject: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::champion::Entity")]
    Champion,
}

impl Related<super::champion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Champion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
