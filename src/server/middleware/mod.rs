//! Request guards and response middleware.
//!
//! - [`auth`] resolves the bearer token of a request to its user
//! - [`problem`] renders problem details attached by failed handlers

pub mod auth;
pub mod problem;

#[cfg(test)]
mod test;
