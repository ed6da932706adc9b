//! Accommodation factory for creating test accommodation entities.

use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accommodations with customizable fields.
///
/// Default values are sourced from the accommodation fixture. The factory inserts only
/// the accommodation row; pair it with `LocationFactory` (or use
/// `helpers::create_accommodation_with_location`) to get a complete listing.
///
/// # Example
///
/// ```rust,ignore
/// let accommodation = AccommodationFactory::new(&db, user.id)
///     .name("Mountain Lodge Deluxe")
///     .availability(15)
///     .build()
///     .await?;
/// ```
pub struct AccommodationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::accommodation::Model,
}

impl<'a> AccommodationFactory<'a> {
    /// Creates a new AccommodationFactory owned by `user_id` with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let entity = fixture::accommodation::entity_builder()
            .user_id(user_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    /// Sets reputation and badge together.
    pub fn reputation(mut self, reputation: i32, badge: impl Into<String>) -> Self {
        self.entity.reputation = reputation;
        self.entity.reputation_badge = badge.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn availability(mut self, availability: i64) -> Self {
        self.entity.availability = availability;
        self
    }

    /// Builds and inserts the accommodation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::accommodation::Model)` - Created accommodation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::accommodation::Model, DbErr> {
        let now = Utc::now();
        entity::accommodation::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            name: ActiveValue::Set(self.entity.name),
            rating: ActiveValue::Set(self.entity.rating),
            category: ActiveValue::Set(self.entity.category),
            image_url: ActiveValue::Set(self.entity.image_url),
            reputation: ActiveValue::Set(self.entity.reputation),
            reputation_badge: ActiveValue::Set(self.entity.reputation_badge),
            price: ActiveValue::Set(self.entity.price),
            availability: ActiveValue::Set(self.entity.availability),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an accommodation with default values owned by `user_id`.
pub async fn create_accommodation(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::accommodation::Model, DbErr> {
    AccommodationFactory::new(db, user_id).build().await
}
