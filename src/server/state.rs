//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT verifier for bearer tokens
//! - The small talk pairing queue

use sea_orm::DatabaseConnection;

use crate::server::{service::queue::PairingQueue, util::jwt::JwtService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` holds only keys and validation settings
/// - `PairingQueue` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifier for `Authorization: Bearer` tokens.
    pub jwt: JwtService,

    /// FIFO of participants waiting to be paired for small talk.
    ///
    /// Created empty at startup; its contents do not survive a restart.
    pub queue: PairingQueue,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token verifier
    /// - `queue` - Pairing queue
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtService, queue: PairingQueue) -> Self {
        Self { db, jwt, queue }
    }
}
