//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Every operation runs inside its own unit of work.

pub mod container;
mod example_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use example_service::{ExampleManager, ExampleService};
