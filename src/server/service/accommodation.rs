use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::accommodation::AccommodationRepository,
    error::{internal::InternalError, AppError},
    model::accommodation::{Accommodation, AccommodationParams},
};

pub struct AccommodationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccommodationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every accommodation owned by `user_id`, oldest first.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Accommodation>, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let results = repo.get_by_user(user_id).await?;

        let accommodations: Result<Vec<_>, _> = results
            .into_iter()
            .map(Accommodation::from_with_location)
            .collect();

        Ok(accommodations?)
    }

    /// Creates an accommodation with its location, owned by `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        params: AccommodationParams,
    ) -> Result<Accommodation, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let result = repo.create(user_id, params).await?;
        let accommodation = Accommodation::from_with_location(result)?;

        tracing::info!(
            "User {} created accommodation {}",
            accommodation.user_id,
            accommodation.id
        );

        Ok(accommodation)
    }

    /// Gets an accommodation by ID regardless of owner.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Accommodation>, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let result = repo.get_by_id(id).await?;

        result
            .map(Accommodation::from_with_location)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let repo = AccommodationRepository::new(self.db);

        Ok(repo.exists(id).await?)
    }

    /// Replaces every field of an accommodation and its location.
    /// Returns None if the accommodation doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: AccommodationParams,
    ) -> Result<Option<Accommodation>, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let Some(result) = repo.update(id, params).await? else {
            return Ok(None);
        };
        let accommodation = Accommodation::from_with_location(result)?;

        tracing::info!("Updated accommodation {}", id);

        Ok(Some(accommodation))
    }

    /// Deletes an accommodation and its location.
    /// Returns false if the accommodation doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted accommodation {}", id);
        }

        Ok(deleted)
    }

    /// Books one unit of an accommodation by decrementing its availability.
    ///
    /// This is a plain read-modify-write without a lock or lower bound: availability may
    /// go negative, and two concurrent bookings can both read the same value so that only
    /// one decrement is kept.
    ///
    /// # Returns
    /// - `Ok(true)` - Availability decremented
    /// - `Ok(false)` - Accommodation doesn't exist, or was deleted before the write
    /// - `Err(AppError::Internal)` - Availability is already `i64::MIN`
    /// - `Err(AppError::DbErr)` - Database error during read or write
    pub async fn book(&self, id: i32) -> Result<bool, AppError> {
        let repo = AccommodationRepository::new(self.db);

        let Some(result) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        let current = result.accommodation.availability;
        let availability = current
            .checked_sub(1)
            .ok_or(InternalError::AvailabilityUnderflow {
                accommodation_id: id,
            })?;

        match repo.update_availability(id, availability).await {
            Ok(()) => {}
            Err(DbErr::RecordNotUpdated) => return Ok(false),
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(
            "Booked accommodation {}: availability {} -> {}",
            id,
            current,
            availability
        );

        Ok(true)
    }
}
