//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults into the test database, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (accommodation, location) =
//!     factory::helpers::create_accommodation_with_location(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let accommodation = factory::accommodation::AccommodationFactory::new(&db, user.id)
//!     .availability(15)
//!     .build()
//!     .await?;
//! ```

pub mod accommodation;
pub mod helpers;
pub mod location;
pub mod user;

pub use accommodation::create_accommodation;
pub use helpers::create_accommodation_with_location;
pub use location::create_location;
pub use user::create_user;
