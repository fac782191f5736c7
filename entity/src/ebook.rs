use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ebook")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub user_id: i32,
    pub ebook_series_id: Option<i32>,
    pub date_time: DateTimeUtc,
    pub is_deleted: bool,
    pub is_modified: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::ebook_series::Entity",
        from = "Column::EbookSeriesId",
        to = "super::ebook_series::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EbookSeries,
    #[sea_orm(has_many = "super::ebook_star_rate::Entity")]
    EbookStarRate,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::ebook_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EbookSeries.def()
    }
}

impl Related<super::ebook_star_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EbookStarRate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
