use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "small_talk")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub date_time: DateTimeUtc,
    pub small_subject_id: i32,
    pub user_id: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::small_subject::Entity",
        from = "Column::SmallSubjectId",
        to = "super::small_subject::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SmallSubject,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::small_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmallSubject.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
