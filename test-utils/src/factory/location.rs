//! Location factory for creating test location entities.

use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations attached to an existing accommodation.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory for `accommodation_id` with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, accommodation_id: i32) -> Self {
        let entity = fixture::location::entity_builder()
            .accommodation_id(accommodation_id)
            .build();

        Self { db, entity }
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.entity.zip_code = zip_code.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - Created location entity
    /// - `Err(DbErr)` - Database error during insert (e.g. accommodation already has one)
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let now = Utc::now();
        entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            accommodation_id: ActiveValue::Set(self.entity.accommodation_id),
            city: ActiveValue::Set(self.entity.city),
            state: ActiveValue::Set(self.entity.state),
            country: ActiveValue::Set(self.entity.country),
            zip_code: ActiveValue::Set(self.entity.zip_code),
            address: ActiveValue::Set(self.entity.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values for `accommodation_id`.
pub async fn create_location(
    db: &DatabaseConnection,
    accommodation_id: i32,
) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db, accommodation_id).build().await
}
