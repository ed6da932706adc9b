//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations inside transactions where needed
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Validation** (`validation/`) - Payload rules, independent of the web framework
//! - **Error Layer** (`error/`) - Application error types and problem-detail mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and problem rendering
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database, CORS and shutdown setup
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** routes the request; tracing wraps every request
//! 2. **Controller** resolves the bearer token, looks up the target, validates the body
//! 3. **Service** calls the repository and converts entities to domain models
//! 4. **Controller** converts the domain model to a DTO
//! 5. **Middleware** renders any attached problem into `application/problem+json`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
