use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod require;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
