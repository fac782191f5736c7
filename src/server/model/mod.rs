//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod board;
pub mod comment;
pub mod ebook;
pub mod notify;
pub mod page;
pub mod qna;
pub mod queue;
pub mod small_talk;
pub mod user;

/// Outcome of an operation restricted to the resource owner.
///
/// A mismatch is a normal outcome reported to the client with `success: false`,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Ownership<T> {
    /// Caller owns the resource; carries the operation's result.
    Owner(T),
    /// Caller is not the owner; nothing was changed.
    NotOwner,
}

impl<T> Ownership<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Ownership<U> {
        match self {
            Self::Owner(value) => Ownership::Owner(f(value)),
            Self::NotOwner => Ownership::NotOwner,
        }
    }
}
