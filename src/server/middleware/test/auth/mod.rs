use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    util::jwt::JwtService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_admin;

const SECRET: &str = "test-secret";

/// Builds request headers carrying `Authorization: Bearer <token>`.
fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
