pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_board_category_table;
mod m20240301_000003_create_board_table;
mod m20240301_000004_create_board_comment_table;
mod m20240301_000005_create_board_recommend_table;
mod m20240301_000006_create_board_notify_table;
mod m20240302_000007_create_qna_table;
mod m20240303_000008_create_ebook_series_table;
mod m20240303_000009_create_ebook_table;
mod m20240303_000010_create_ebook_star_rate_table;
mod m20240304_000011_create_small_subject_table;
mod m20240304_000012_create_small_talk_table;
mod m20240304_000013_create_random_subject_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_board_category_table::Migration),
            Box::new(m20240301_000003_create_board_table::Migration),
            Box::new(m20240301_000004_create_board_comment_table::Migration),
            Box::new(m20240301_000005_create_board_recommend_table::Migration),
            Box::new(m20240301_000006_create_board_notify_table::Migration),
            Box::new(m20240302_000007_create_qna_table::Migration),
            Box::new(m20240303_000008_create_ebook_series_table::Migration),
            Box::new(m20240303_000009_create_ebook_table::Migration),
            Box::new(m20240303_000010_create_ebook_star_rate_table::Migration),
            Box::new(m20240304_000011_create_small_subject_table::Migration),
            Box::new(m20240304_000012_create_small_talk_table::Migration),
            Box::new(m20240304_000013_create_random_subject_table::Migration),
        ]
    }
}
