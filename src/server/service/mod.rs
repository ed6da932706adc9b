//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They convert repository
//! results to domain models, turn integrity failures into `AppError`, and log mutations.

pub mod accommodation;
