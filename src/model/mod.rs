//! Wire-level DTOs shared by every HTTP endpoint.
//!
//! These types are what the API serializes and deserializes. Server-side domain models
//! in `server::model` convert into them with `into_dto()` at the controller boundary.

pub mod api;
pub mod board;
pub mod comment;
pub mod ebook;
pub mod notify;
pub mod page;
pub mod qna;
pub mod small_talk;
