//! User domain model.
//!
//! Users are provisioned outside the API; the server only resolves them from bearer
//! tokens and exposes their public profile.

use crate::model::user::UserDto;

/// Authenticated owner of accommodations.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the API token.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}
