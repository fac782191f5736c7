use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User,
    m20240304_000011_create_small_subject_table::SmallSubject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SmallTalk::Table)
                    .if_not_exists()
                    .col(pk_auto(SmallTalk::Id))
                    .col(text(SmallTalk::Contents))
                    .col(
                        timestamp_with_time_zone(SmallTalk::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(SmallTalk::SmallSubjectId))
                    .col(integer(SmallTalk::UserId))
                    .col(boolean(SmallTalk::IsDeleted).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_small_talk_small_subject_id")
                            .from(SmallTalk::Table, SmallTalk::SmallSubjectId)
                            .to(SmallSubject::Table, SmallSubject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_small_talk_user_id")
                            .from(SmallTalk::Table, SmallTalk::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SmallTalk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SmallTalk {
    Table,
    Id,
    Contents,
    DateTime,
    SmallSubjectId,
    UserId,
    IsDeleted,
}
