//! JWT verification for bearer tokens.
//!
//! Tokens are issued elsewhere; this service only verifies HS256 signatures against the
//! configured secret and extracts the caller's identity.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub username: String,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Verifies access tokens.
#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
    #[cfg(test)]
    encoding_key: jsonwebtoken::EncodingKey,
}

impl JwtService {
    /// Creates a verifier for tokens signed with `secret`.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    ///
    /// # Returns
    /// - `JwtService` - Verifier accepting HS256 tokens only
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            #[cfg(test)]
            encoding_key: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Raw token without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature and expiry are valid
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, tampered with or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Issues a token for tests.
    #[cfg(test)]
    pub fn issue(&self, user_id: i32, username: &str, ttl_secs: i64) -> String {
        let claims = Claims {
            user_id,
            username: username.to_string(),
            exp: chrono::Utc::now().timestamp() + ttl_secs,
        };
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.encoding_key)
            .expect("encode test token")
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// # Returns
/// - `Some(&str)` - Token part of the header
/// - `None` - Header does not use the Bearer scheme or the token is empty
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_issued_token() {
        let jwt = JwtService::new("test-secret");
        let token = jwt.issue(42, "alice", 3600);

        let claims = jwt.verify(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = JwtService::new("secret-a");
        let verifier = JwtService::new("secret-b");
        let token = issuer.issue(1, "alice", 3600);

        assert!(matches!(
            verifier.verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtService::new("test-secret");
        // Past the default 60s leeway
        let token = jwt.issue(1, "alice", -120);

        assert!(jwt.verify(&token).is_err());
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer "), None);
    }
}
