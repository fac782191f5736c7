use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::VerifiedUser,
    util::jwt::{bearer_token, JwtService},
};

pub enum Permission {
    Admin,
}

/// Verifies the caller's bearer token and any required permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the request and checks `permissions`.
    ///
    /// Token verification alone does not touch the database; `Permission::Admin`
    /// loads the user row to read its admin flag.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold, empty for any signed-in user
    ///
    /// # Returns
    /// - `Ok(VerifiedUser)` - Identity from the token
    /// - `Err(AuthError::MissingToken | InvalidToken)` - 401
    /// - `Err(AuthError::UserNotInDatabase)` - 401, admin check on a deleted user
    /// - `Err(AuthError::AccessDenied)` - 403, permission missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<VerifiedUser, AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.jwt.verify(token)?;
        let user = VerifiedUser {
            user_id: claims.user_id,
            username: claims.username,
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let Some(record) = UserRepository::new(self.db)
                        .find_by_id(user.user_id)
                        .await?
                    else {
                        return Err(AuthError::UserNotInDatabase(user.user_id).into());
                    };

                    if !record.admin {
                        return Err(AuthError::AccessDenied(user.user_id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
