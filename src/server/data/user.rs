//! User data repository for database operations.
//!
//! Users are provisioned outside the API, so this repository only reads. It resolves
//! bearer tokens to users and converts entity models to domain models at the boundary.

use crate::server::model::user::User;
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

    /// Finds the user owning an API token.
    ///
    /// Tokens are compared exactly; an empty token never matches because the auth guard
    /// rejects it before reaching the database.
    ///
    /// # Arguments
    /// - `api_token` - Bearer token taken from the request
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token belongs to a user
    /// - `Ok(None)` - Token is unknown
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_api_token(&self, api_token: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ApiToken.eq(api_token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
