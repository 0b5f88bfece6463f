//! Example service - CRUD over a single entity
//!
//! Filterable, sortable and paginated reads, field validation and a unique
//! email across create and update, layered the usual way.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entity, filter, validation rules, credential hashing
//! - **services**: Application use cases and business logic
//! - **infra**: Database, repository and unit of work
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Create the example table
//! cargo run -- schema
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Example, ExampleDraft, ExampleFilter};
pub use errors::{AppError, AppResult};
pub use infra::Database;
