use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub date_time: DateTimeUtc,
    pub user_id: i32,
    pub board_category_id: i32,
    pub ban: bool,
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
        belongs_to = "super::board_category::Entity",
        from = "Column::BoardCategoryId",
        to = "super::board_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BoardCategory,
    #[sea_orm(has_many = "super::board_comment::Entity")]
    BoardComment,
    #[sea_orm(has_many = "super::board_recommend::Entity")]
    BoardRecommend,
    #[sea_orm(has_many = "super::board_notify::Entity")]
    BoardNotify,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::board_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardCategory.def()
    }
}

impl Related<super::board_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardComment.def()
    }
}

impl Related<super::board_recommend::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardRecommend.def()
    }
}

impl Related<super::board_notify::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardNotify.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
