//! Accommodation domain models and parameters.
//!
//! Provides the accommodation and location domain models, the normalized parameter type
//! produced by payload validation, and the conversions between entities, domain models
//! and the public resource representation.

use serde_json::Value;

use crate::{
    model::accommodation::{AccommodationDto, Category, LocationDto, ReputationBadge},
    server::{
        error::{internal::InternalError, validation::ValidationError},
        validation,
    },
};

/// Postal address of an accommodation.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    /// Exactly five decimal digits.
    pub zip_code: String,
    pub address: String,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            city: entity.city,
            state: entity.state,
            country: entity.country,
            zip_code: entity.zip_code,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            city: self.city,
            state: self.state,
            country: self.country,
            zip_code: self.zip_code,
            address: self.address,
        }
    }
}

/// Lodging listing with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: i32,
    /// ID of the user who created the listing.
    pub user_id: i32,
    pub name: String,
    pub rating: i32,
    pub category: Category,
    pub image_url: String,
    pub reputation: i32,
    pub reputation_badge: ReputationBadge,
    pub price: i64,
    pub availability: i64,
    pub location: Location,
}

/// Accommodation entity joined with its optional location row, as read from the database.
#[derive(Debug, Clone)]
pub struct AccommodationWithLocation {
    pub accommodation: entity::accommodation::Model,
    pub location: Option<entity::location::Model>,
}

impl Accommodation {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `result` - Accommodation entity with its related location
    ///
    /// # Returns
    /// - `Ok(Accommodation)` - Converted domain model
    /// - `Err(InternalError::MissingLocation)` - No location row exists
    /// - `Err(InternalError::InvalidStoredValue)` - Category or badge column is unrecognised
    pub fn from_with_location(result: AccommodationWithLocation) -> Result<Self, InternalError> {
        let AccommodationWithLocation {
            accommodation,
            location,
        } = result;
        let accommodation_id = accommodation.id;

        let location = location.ok_or(InternalError::MissingLocation { accommodation_id })?;

        let category = accommodation.category.parse::<Category>().map_err(|e| {
            InternalError::InvalidStoredValue {
                accommodation_id,
                column: "category",
                value: e.0,
            }
        })?;
        let reputation_badge = accommodation
            .reputation_badge
            .parse::<ReputationBadge>()
            .map_err(|e| InternalError::InvalidStoredValue {
                accommodation_id,
                column: "reputation_badge",
                value: e.0,
            })?;

        Ok(Self {
            id: accommodation_id,
            user_id: accommodation.user_id,
            name: accommodation.name,
            rating: accommodation.rating,
            category,
            image_url: accommodation.image_url,
            reputation: accommodation.reputation,
            reputation_badge,
            price: accommodation.price,
            availability: accommodation.availability,
            location: Location::from_entity(location),
        })
    }

    /// Converts the domain model into the public resource.
    ///
    /// Renames `image_url` to `image` and `reputation_badge` to `reputationBadge`; no other
    /// field is transformed.
    pub fn into_dto(self) -> AccommodationDto {
        AccommodationDto {
            name: self.name,
            rating: self.rating,
            category: self.category,
            image: self.image_url,
            reputation: self.reputation,
            reputation_badge: self.reputation_badge,
            price: self.price,
            availability: self.availability,
            location: self.location.into_dto(),
        }
    }
}

/// Validated location fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationParams {
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub address: String,
}

/// Validated and normalized accommodation fields for create and update.
///
/// Only obtainable through [`AccommodationParams::validate`] outside of tests, which
/// guarantees the reputation badge matches the reputation.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationParams {
    pub name: String,
    pub rating: i32,
    pub category: Category,
    pub image_url: String,
    pub reputation: i32,
    pub reputation_badge: ReputationBadge,
    pub price: i64,
    pub availability: i64,
    pub location: LocationParams,
}

impl AccommodationParams {
    /// Validates a raw request payload.
    ///
    /// # Returns
    /// - `Ok(AccommodationParams)` - Every field passed
    /// - `Err(ValidationError)` - All violated fields with their messages
    pub fn validate(payload: &Value) -> Result<Self, ValidationError> {
        validation::accommodation::validate(payload)
    }
}
