use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "champion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tournament: String,
    /// ISO `YYYY-MM-DD` date of the win, kept as text at the store boundary.
    pub date: String,
    pub winner: String,
    pub category: String,
    /// Inline-encoded image payload (data URL), empty when no image is attached.
    #[sea_orm(column_type = "Text")]
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub created_by: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::podium_user::Entity",
        from = "Column::CreatedBy",
        to = "super::podium_user::Column::Id"
    )]
    PodiumUser,
}

impl Related<super::podium_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PodiumUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
