//! Service Container - Centralized service access.
//!
//! Wires the unit-of-work factory and the credential hasher into the
//! application services so callers only see service traits.

use std::sync::Arc;

use super::{ExampleManager, ExampleService};
use crate::domain::Argon2Hasher;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get example service
    fn examples(&self) -> Arc<dyn ExampleService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    example_service: Arc<dyn ExampleService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let example_service: Arc<dyn ExampleService> =
            Arc::new(ExampleManager::new(uow, Arc::new(Argon2Hasher::new())));

        Self { example_service }
    }
}

impl ServiceContainer for Services {
    fn examples(&self) -> Arc<dyn ExampleService> {
        self.example_service.clone()
    }
}
