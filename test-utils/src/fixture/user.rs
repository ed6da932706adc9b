//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test@example.com";

/// Default test API token.
pub const DEFAULT_API_TOKEN: &str = "test-api-token";

/// Creates a user entity model with default values.
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    name: String,
    email: String,
    api_token: String,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            api_token: self.api_token,
            created_at: now,
            updated_at: now,
        }
    }
}
