//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and titles to prevent collisions with unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a board together with its author and category.
///
/// This is a convenience method that creates:
/// 1. User (as author)
/// 2. Board category
/// 3. Board
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, board))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::board_category::Model,
        entity::board::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::board::create_category(db).await?;
    let board = crate::factory::board::create_board(db, user.id, category.id).await?;

    Ok((user, category, board))
}

/// Creates an e-book together with its author.
///
/// # Returns
/// - `Ok((user, ebook))` - The author and the created e-book (no series)
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ebook_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::ebook::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let ebook = crate::factory::ebook::create_ebook(db, user.id).await?;

    Ok((user, ebook))
}
