use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SmallSubject::Table)
                    .if_not_exists()
                    .col(pk_auto(SmallSubject::Id))
                    .col(string_uniq(SmallSubject::Title))
                    .col(text(SmallSubject::Detail))
                    .col(string_null(SmallSubject::ImgUrl))
                    .col(
                        timestamp_with_time_zone(SmallSubject::DateTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(SmallSubject::UserId))
                    .col(boolean(SmallSubject::IsDeleted).default(false))
                    .col(boolean(SmallSubject::IsModified).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_small_subject_user_id")
                            .from(SmallSubject::Table, SmallSubject::UserId)
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
            .drop_table(Table::drop().table(SmallSubject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SmallSubject {
    Table,
    Id,
    Title,
    Detail,
    ImgUrl,
    DateTime,
    UserId,
    IsDeleted,
    IsModified,
}
