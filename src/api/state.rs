//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ExampleService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Example service
    pub example_service: Arc<dyn ExampleService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database, wiring services through
    /// the ServiceContainer.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            example_service: container.examples(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(example_service: Arc<dyn ExampleService>, database: Arc<Database>) -> Self {
        Self {
            example_service,
            database,
        }
    }
}
