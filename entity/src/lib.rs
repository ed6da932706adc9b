//! SeaORM entity definitions for the lodging database schema.

pub mod prelude;

pub mod accommodation;
pub mod location;
pub mod user;
