//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and request payloads for use in unit tests and
//! as default values for factories. Unlike factories, fixtures do NOT insert data into the
//! database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory entity model (no DB)
//! let accommodation = fixture::accommodation::entity();
//!
//! // Valid request body with one field overridden
//! let body = fixture::payload::valid_with("name", "Limited Offer".into());
//! ```

pub mod accommodation;
pub mod location;
pub mod payload;
pub mod user;

pub use accommodation::{
    entity as accommodation_entity, entity_builder as accommodation_entity_builder,
};
pub use location::{entity as location_entity, entity_builder as location_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
