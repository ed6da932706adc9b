use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Resolves `Authorization: Bearer <token>` to the owning user.
///
/// Handlers call [`AuthGuard::require`] first and pass the returned user on explicitly.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token belongs to a user
    /// - `Err(AppError::AuthErr(AuthError::MissingToken))` - No usable bearer header
    /// - `Err(AppError::AuthErr(AuthError::UnknownToken))` - Token matches no user
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_api_token(token).await? else {
            return Err(AuthError::UnknownToken.into());
        };

        Ok(user)
    }
}

/// Extracts the token from an `Authorization` header, matching the scheme case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
