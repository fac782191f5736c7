use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub nickname: String,
    pub img: Option<String>,
    pub admin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board::Entity")]
    Board,
    #[sea_orm(has_many = "super::board_comment::Entity")]
    BoardComment,
    #[sea_orm(has_many = "super::small_subject::Entity")]
    SmallSubject,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl Related<super::board_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardComment.def()
    }
}

impl Related<super::small_subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmallSubject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
