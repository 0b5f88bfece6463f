//! Unit of Work pattern implementation.
//!
//! Every service operation begins its own unit of work and drops it on
//! exit, whatever the outcome. A unit stages mutations and applies them
//! with one `save`; unsaved changes die with the unit.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::repositories::{ExampleRepository, ExampleStore};
use crate::errors::AppResult;

/// Unit of Work factory for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Open a fresh unit scoped to one operation.
    async fn begin(&self) -> AppResult<Box<dyn ExampleRepository>>;
}

/// Concrete implementation of UnitOfWork
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn begin(&self) -> AppResult<Box<dyn ExampleRepository>> {
        Ok(Box::new(ExampleStore::new(self.db.clone())))
    }
}
