//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the parent ids they depend on explicitly;
//! `helpers` bundles the common dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let category = factory::board::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, category, board) = factory::helpers::create_board_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .nickname("moderator")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let board = factory::board::BoardFactory::new(&db, user.id, category.id)
//!     .title("hello world")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `board` - Create board categories, boards, comments and reports
//! - `qna` - Create Q&A entries
//! - `ebook` - Create e-book series, e-books and ratings
//! - `small_talk` - Create small talk subjects, talks and random subjects
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod board;
pub mod ebook;
pub mod helpers;
pub mod qna;
pub mod small_talk;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use board::{create_board, create_category};
pub use ebook::{create_ebook, create_series};
pub use qna::create_qna;
pub use small_talk::create_subject;
pub use user::create_user;
