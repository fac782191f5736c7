use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "small_subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub detail: String,
    pub img_url: Option<String>,
    pub date_time: DateTimeUtc,
    pub user_id: i32,
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
    #[sea_orm(has_many = "super::small_talk::Entity")]
    SmallTalk,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::small_talk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmallTalk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
