//! Database repository layer.
//!
//! Repositories borrow the database connection and perform all queries, inserts, updates
//! and deletes for one domain. Writes touching more than one table run inside a single
//! transaction. Repositories return entity or domain models and `DbErr`; mapping to HTTP
//! failures happens in the service and controller layers.

pub mod accommodation;
pub mod user;
