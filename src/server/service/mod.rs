//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, validation and state transitions
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: The recommend toggle and board bans run in one transaction

pub mod board;
pub mod comment;
pub mod ebook;
pub mod notify;
pub mod qna;
pub mod queue;
pub mod recommend;
pub mod small_talk;

#[cfg(test)]
mod test;
