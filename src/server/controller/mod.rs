//! HTTP request handlers.
//!
//! Every handler authenticates through `AuthGuard` first, then performs its own lookups
//! so that 401 wins over 404, and 404 wins over 400 and 422.

pub mod accommodation;
pub mod user;
