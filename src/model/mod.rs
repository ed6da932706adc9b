//! Wire-level data transfer objects shared by the HTTP layer and the OpenAPI document.

pub mod accommodation;
pub mod api;
pub mod user;
