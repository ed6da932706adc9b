//! Accommodation data repository for database operations.
//!
//! An accommodation and its location are always written together: create, update and
//! delete each run in one transaction so a listing never exists without its address.
//! Reads join the location with `find_also_related` and hand both entities back as an
//! [`AccommodationWithLocation`]; converting to the domain model is left to the service
//! because a missing location is an integrity failure rather than a database error.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::accommodation::{
    AccommodationParams, AccommodationWithLocation, LocationParams,
};

pub struct AccommodationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an accommodation owned by `user_id` together with its location.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated owner
    /// - `params` - Validated accommodation fields
    ///
    /// # Returns
    /// - `Ok(AccommodationWithLocation)` - Both created rows
    /// - `Err(DbErr)` - Either insert failed; nothing was written
    pub async fn create(
        &self,
        user_id: i32,
        params: AccommodationParams,
    ) -> Result<AccommodationWithLocation, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let accommodation = entity::accommodation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(params.name),
            rating: ActiveValue::Set(params.rating),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            image_url: ActiveValue::Set(params.image_url),
            reputation: ActiveValue::Set(params.reputation),
            reputation_badge: ActiveValue::Set(params.reputation_badge.as_str().to_string()),
            price: ActiveValue::Set(params.price),
            availability: ActiveValue::Set(params.availability),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let location = location_active_model(accommodation.id, params.location)
            .insert(&txn)
            .await?;

        txn.commit().await?;

        Ok(AccommodationWithLocation {
            accommodation,
            location: Some(location),
        })
    }

    /// Gets an accommodation by ID with its location.
    ///
    /// # Returns
    /// - `Ok(Some(AccommodationWithLocation))` - Accommodation found; location may be `None`
    ///   if the row is missing
    /// - `Ok(None)` - No accommodation with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AccommodationWithLocation>, DbErr> {
        let result = entity::prelude::Accommodation::find_by_id(id)
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        Ok(result.map(|(accommodation, location)| AccommodationWithLocation {
            accommodation,
            location,
        }))
    }

    /// Gets every accommodation owned by `user_id` in insertion order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<AccommodationWithLocation>, DbErr> {
        let results = entity::prelude::Accommodation::find()
            .filter(entity::accommodation::Column::UserId.eq(user_id))
            .order_by_asc(entity::accommodation::Column::Id)
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(accommodation, location)| AccommodationWithLocation {
                accommodation,
                location,
            })
            .collect())
    }

    /// Checks whether an accommodation with `id` exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Accommodation::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces every field of an accommodation and its location.
    ///
    /// The owner is never changed. A missing location row is recreated from `params`.
    ///
    /// # Arguments
    /// - `id` - ID of the accommodation to update
    /// - `params` - Validated accommodation fields
    ///
    /// # Returns
    /// - `Ok(Some(AccommodationWithLocation))` - Both updated rows
    /// - `Ok(None)` - No accommodation with that ID
    /// - `Err(DbErr)` - Database error; nothing was written
    pub async fn update(
        &self,
        id: i32,
        params: AccommodationParams,
    ) -> Result<Option<AccommodationWithLocation>, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Accommodation::find_by_id(id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::accommodation::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.rating = ActiveValue::Set(params.rating);
        active.category = ActiveValue::Set(params.category.as_str().to_string());
        active.image_url = ActiveValue::Set(params.image_url);
        active.reputation = ActiveValue::Set(params.reputation);
        active.reputation_badge = ActiveValue::Set(params.reputation_badge.as_str().to_string());
        active.price = ActiveValue::Set(params.price);
        active.availability = ActiveValue::Set(params.availability);
        active.updated_at = ActiveValue::Set(now);
        let accommodation = active.update(&txn).await?;

        let existing_location = entity::prelude::Location::find()
            .filter(entity::location::Column::AccommodationId.eq(id))
            .one(&txn)
            .await?;

        let location = match existing_location {
            Some(location) => {
                let mut active: entity::location::ActiveModel = location.into();
                active.city = ActiveValue::Set(params.location.city);
                active.state = ActiveValue::Set(params.location.state);
                active.country = ActiveValue::Set(params.location.country);
                active.zip_code = ActiveValue::Set(params.location.zip_code);
                active.address = ActiveValue::Set(params.location.address);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?
            }
            None => {
                location_active_model(id, params.location)
                    .insert(&txn)
                    .await?
            }
        };

        txn.commit().await?;

        Ok(Some(AccommodationWithLocation {
            accommodation,
            location: Some(location),
        }))
    }

    /// Overwrites the availability counter of an accommodation.
    ///
    /// No bounds are applied and no lock is taken; callers compute the new value.
    ///
    /// # Returns
    /// - `Ok(())` - Availability written
    /// - `Err(DbErr::RecordNotUpdated)` - No accommodation with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_availability(&self, id: i32, availability: i64) -> Result<(), DbErr> {
        entity::accommodation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            availability: ActiveValue::Set(availability),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes an accommodation and its location.
    ///
    /// The location is deleted explicitly before the accommodation rather than relying on
    /// the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Accommodation deleted
    /// - `Ok(false)` - No accommodation with that ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Location::delete_many()
            .filter(entity::location::Column::AccommodationId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Accommodation::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

fn location_active_model(
    accommodation_id: i32,
    params: LocationParams,
) -> entity::location::ActiveModel {
    let now = Utc::now();

    entity::location::ActiveModel {
        accommodation_id: ActiveValue::Set(accommodation_id),
        city: ActiveValue::Set(params.city),
        state: ActiveValue::Set(params.state),
        country: ActiveValue::Set(params.country),
        zip_code: ActiveValue::Set(params.zip_code),
        address: ActiveValue::Set(params.address),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
