use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Board};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Board)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in the order they were added.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after the tables are created.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for board operations.
    ///
    /// Adds, in dependency order: User, BoardCategory, Board, BoardComment,
    /// BoardRecommend, BoardNotify, plus the unique (board_id, user_id) index on
    /// BoardRecommend that production migrations create.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_board_tables(self) -> Self {
        self.with_table(User)
            .with_table(BoardCategory)
            .with_table(Board)
            .with_table(BoardComment)
            .with_table(BoardRecommend)
            .with_table(BoardNotify)
            .with_index(
                Index::create()
                    .name("idx_board_recommend_board_user")
                    .table(BoardRecommend)
                    .col(entity::board_recommend::Column::BoardId)
                    .col(entity::board_recommend::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds all tables required for the e-book catalog.
    ///
    /// Adds User, EbookSeries, Ebook and EbookStarRate with the unique
    /// (ebook_id, user_id) index on ratings.
    pub fn with_ebook_tables(self) -> Self {
        self.with_table(User)
            .with_table(EbookSeries)
            .with_table(Ebook)
            .with_table(EbookStarRate)
            .with_index(
                Index::create()
                    .name("idx_ebook_star_rate_ebook_user")
                    .table(EbookStarRate)
                    .col(entity::ebook_star_rate::Column::EbookId)
                    .col(entity::ebook_star_rate::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the tables required for Q&A entries.
    pub fn with_qna_tables(self) -> Self {
        self.with_table(User).with_table(Qna)
    }

    /// Adds all tables required for small talk subjects, talks and random subjects.
    pub fn with_small_talk_tables(self) -> Self {
        self.with_table(User)
            .with_table(SmallSubject)
            .with_table(SmallTalk)
            .with_table(RandomSubject)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, followed by the indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
