//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories whose operations must run inside a transaction are generic over
//! `ConnectionTrait` so they accept either the pool or a `DatabaseTransaction`.

pub mod board;
pub mod comment;
pub mod ebook;
pub mod notify;
pub mod qna;
pub mod recommend;
pub mod small_talk;
pub mod user;

#[cfg(test)]
mod test;
