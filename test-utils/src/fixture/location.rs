//! Location fixtures for creating in-memory test data.

use chrono::Utc;
use entity::location;

pub const DEFAULT_CITY: &str = "Cuernavaca";
pub const DEFAULT_STATE: &str = "Morelos";
pub const DEFAULT_COUNTRY: &str = "Mexico";
pub const DEFAULT_ZIP_CODE: &str = "62448";
pub const DEFAULT_ADDRESS: &str = "Boulevard Díaz Ordaz No. 9 Cantarranas";

/// Creates a location entity model with default values attached to accommodation `1`.
pub fn entity() -> location::Model {
    entity_builder().build()
}

/// Creates a location entity builder for customization.
pub fn entity_builder() -> LocationEntityBuilder {
    LocationEntityBuilder::default()
}

/// Builder for customized location entity models.
pub struct LocationEntityBuilder {
    id: i32,
    accommodation_id: i32,
    city: String,
    state: String,
    country: String,
    zip_code: String,
    address: String,
}

impl Default for LocationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            accommodation_id: 1,
            city: DEFAULT_CITY.to_string(),
            state: DEFAULT_STATE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            zip_code: DEFAULT_ZIP_CODE.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl LocationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn accommodation_id(mut self, accommodation_id: i32) -> Self {
        self.accommodation_id = accommodation_id;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and returns the location entity model.
    pub fn build(self) -> location::Model {
        let now = Utc::now();
        location::Model {
            id: self.id,
            accommodation_id: self.accommodation_id,
            city: self.city,
            state: self.state,
            country: self.country,
            zip_code: self.zip_code,
            address: self.address,
            created_at: now,
            updated_at: now,
        }
    }
}
