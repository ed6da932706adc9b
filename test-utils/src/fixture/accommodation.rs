//! Accommodation fixtures for creating in-memory test data.
//!
//! Defaults mirror the canonical valid request payload in [`crate::fixture::payload`] so
//! that entities built here serialize to the same resource the API returns for that payload.

use chrono::Utc;
use entity::accommodation;

/// Default accommodation name.
pub const DEFAULT_NAME: &str = "Example name";

/// Default star rating.
pub const DEFAULT_RATING: i32 = 5;

/// Default category.
pub const DEFAULT_CATEGORY: &str = "hotel";

/// Default image URL.
pub const DEFAULT_IMAGE_URL: &str = "https://image-url.com";

/// Default reputation score.
pub const DEFAULT_REPUTATION: i32 = 990;

/// Default reputation badge, consistent with [`DEFAULT_REPUTATION`].
pub const DEFAULT_REPUTATION_BADGE: &str = "green";

/// Default nightly price.
pub const DEFAULT_PRICE: i64 = 1000;

/// Default number of bookable units.
pub const DEFAULT_AVAILABILITY: i64 = 10;

/// Creates an accommodation entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - name: `"Example name"`
/// - rating: `5`, category: `"hotel"`
/// - reputation: `990`, reputation_badge: `"green"`
/// - price: `1000`, availability: `10`
pub fn entity() -> accommodation::Model {
    entity_builder().build()
}

/// Creates an accommodation entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let accommodation = fixture::accommodation::entity_builder()
///     .reputation(600, "yellow")
///     .availability(15)
///     .build();
/// ```
pub fn entity_builder() -> AccommodationEntityBuilder {
    AccommodationEntityBuilder::default()
}

/// Builder for customized accommodation entity models.
pub struct AccommodationEntityBuilder {
    id: i32,
    user_id: i32,
    name: String,
    rating: i32,
    category: String,
    image_url: String,
    reputation: i32,
    reputation_badge: String,
    price: i64,
    availability: i64,
}

impl Default for AccommodationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            name: DEFAULT_NAME.to_string(),
            rating: DEFAULT_RATING,
            category: DEFAULT_CATEGORY.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            reputation: DEFAULT_REPUTATION,
            reputation_badge: DEFAULT_REPUTATION_BADGE.to_string(),
            price: DEFAULT_PRICE,
            availability: DEFAULT_AVAILABILITY,
        }
    }
}

impl AccommodationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets reputation and badge together; callers are responsible for keeping them consistent.
    pub fn reputation(mut self, reputation: i32, badge: impl Into<String>) -> Self {
        self.reputation = reputation;
        self.reputation_badge = badge.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn availability(mut self, availability: i64) -> Self {
        self.availability = availability;
        self
    }

    /// Builds and returns the accommodation entity model.
    pub fn build(self) -> accommodation::Model {
        let now = Utc::now();
        accommodation::Model {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            rating: self.rating,
            category: self.category,
            image_url: self.image_url,
            reputation: self.reputation,
            reputation_badge: self.reputation_badge,
            price: self.price,
            availability: self.availability,
            created_at: now,
            updated_at: now,
        }
    }
}
