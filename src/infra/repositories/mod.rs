//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub mod entities;
mod example_repository;

pub use example_repository::{ExampleRepository, ExampleStore, SaveSummary};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use example_repository::MockExampleRepository;
