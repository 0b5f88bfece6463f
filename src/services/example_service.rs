//! Example service - Handles example-related business logic.
//!
//! SOLID (SRP): Handles example-related use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::config::{MAX_PAGE_SIZE, UNPAGED_PAGE_SIZE};
use crate::domain::validation::validate;
use crate::domain::{CredentialHasher, Example, ExampleDraft, ExampleFilter};
use crate::errors::{AppError, AppResult, OptionExt, EMAIL_NOT_AVAILABLE};
use crate::infra::{ExampleRepository, UnitOfWork};
use crate::types::Page;

/// Example service trait for dependency injection.
#[async_trait]
pub trait ExampleService: Send + Sync {
    /// Page of examples matching the filter
    async fn list_by_filter(&self, filter: ExampleFilter) -> AppResult<Page<Example>>;

    /// First example matching the filter, `None` when nothing matches
    async fn get_by_filter(&self, filter: ExampleFilter) -> AppResult<Option<Example>>;

    /// Validate and persist a new example, returning its id
    async fn create(&self, draft: ExampleDraft) -> AppResult<i64>;

    /// Validate and apply a draft onto an existing example
    async fn update(&self, id: i64, draft: ExampleDraft) -> AppResult<()>;

    /// Physically delete an example
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Whether no example currently holds this email
    async fn is_email_available(&self, email: &str) -> AppResult<bool>;
}

/// Concrete implementation of ExampleService using Unit of Work.
pub struct ExampleManager<U: UnitOfWork> {
    uow: Arc<U>,
    hasher: Arc<dyn CredentialHasher>,
}

impl<U: UnitOfWork> ExampleManager<U> {
    /// Create new example service instance with Unit of Work
    pub fn new(uow: Arc<U>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { uow, hasher }
    }
}

/// Uniqueness pre-check within the caller's unit of work.
///
/// Advisory only: the store's unique index has the final say at save.
async fn email_available(repo: &dyn ExampleRepository, email: &str) -> AppResult<bool> {
    Ok(repo.find_by_email(email).await?.is_none())
}

fn check_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation("Id is invalid."));
    }
    Ok(())
}

#[async_trait]
impl<U: UnitOfWork> ExampleService for ExampleManager<U> {
    #[instrument(skip(self))]
    async fn list_by_filter(&self, mut filter: ExampleFilter) -> AppResult<Page<Example>> {
        if filter.page_size > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "Maximum allowed page size is {}.",
                MAX_PAGE_SIZE
            )));
        }

        // No page requested: the page size, not the page, is normalised.
        if filter.current_page <= 0 {
            filter.page_size = UNPAGED_PAGE_SIZE;
        }

        let repo = self.uow.begin().await?;

        let count = repo.count_by_filter(&filter).await?;
        if count == 0 {
            return Ok(Page::empty());
        }

        let items = repo.list_by_filter(&filter).await?;
        Ok(Page::new(items, filter.current_page, filter.page_size, count))
    }

    #[instrument(skip(self))]
    async fn get_by_filter(&self, filter: ExampleFilter) -> AppResult<Option<Example>> {
        let repo = self.uow.begin().await?;
        repo.get_by_filter(&filter).await
    }

    #[instrument(skip(self, draft), fields(email = %draft.email))]
    async fn create(&self, draft: ExampleDraft) -> AppResult<i64> {
        validate(&draft)?;

        let mut repo = self.uow.begin().await?;

        if !email_available(repo.as_ref(), &draft.email).await? {
            return Err(AppError::validation(EMAIL_NOT_AVAILABLE));
        }

        let password_hash = self.hasher.hash(&draft.password)?;
        repo.add(Example::new(draft, password_hash));

        let summary = repo.save().await?;
        let id = summary
            .inserted_ids
            .first()
            .copied()
            .ok_or_else(|| AppError::internal("Store did not assign an id to the new example"))?;

        tracing::info!(id, "Example created");
        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: ExampleDraft) -> AppResult<()> {
        check_id(id)?;

        let mut repo = self.uow.begin().await?;

        let mut example = repo.get_by_id(id).await?.ok_or_not_found(id)?;

        validate(&draft)?;

        if example.email != draft.email && !email_available(repo.as_ref(), &draft.email).await? {
            return Err(AppError::validation(EMAIL_NOT_AVAILABLE));
        }

        example.apply(&draft);

        // Re-submitting the current password is a no-op, anything else rotates it.
        if !self.hasher.check(&example.password_hash, &draft.password).verified {
            example.password_hash = self.hasher.hash(&draft.password)?;
            tracing::debug!(id, "Password rotated");
        }

        example.touch();
        repo.update(example);
        repo.save().await?;

        tracing::info!(id, "Example updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> AppResult<()> {
        check_id(id)?;

        let mut repo = self.uow.begin().await?;

        let example = repo.get_by_id(id).await?.ok_or_not_found(id)?;

        repo.remove(example);
        repo.save().await?;

        tracing::info!(id, "Example deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_email_available(&self, email: &str) -> AppResult<bool> {
        let repo = self.uow.begin().await?;
        email_available(repo.as_ref(), email).await
    }
}
