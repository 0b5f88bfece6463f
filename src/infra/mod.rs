//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and schema bootstrap
//! - Repositories
//! - Unit of Work for per-operation change tracking

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::Database;
pub use repositories::{ExampleRepository, ExampleStore, SaveSummary};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockExampleRepository;
