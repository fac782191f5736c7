//! User data repository for database operations.
//!
//! Users are created by the external identity service; this repository only reads them
//! to resolve admin status and display names.

use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `user_id` - User ID carried in the access token
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Fetches several users in one query, keyed by ID.
    ///
    /// Used to attach nicknames to listings without a query per row.
    ///
    /// # Arguments
    /// - `user_ids` - IDs to fetch; duplicates are fine
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Users that exist, keyed by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_map(
        &self,
        user_ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }
}
