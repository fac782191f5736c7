//! The authenticated caller.

/// Identity extracted from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub user_id: i32,
    pub username: String,
}
