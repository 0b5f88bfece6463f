//! Example repository with staged mutations and filter-driven reads.
//!
//! An `ExampleStore` is one unit of work: `add`, `update` and `remove`
//! only stage changes, `save` applies all of them in a single transaction.
//! Dropping a store discards whatever was not saved.

use async_trait::async_trait;
use sea_orm::sea_query::{LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};

use super::entities::example::{self, ActiveModel, Entity as ExampleEntity};
use crate::domain::{Example, ExampleField, ExampleFilter, SortDirection};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// What a successful `save` wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Number of records inserted, updated or deleted
    pub affected: u64,
    /// Store-assigned ids of inserted records, in staging order
    pub inserted_ids: Vec<i64>,
}

/// Example repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExampleRepository: Send + Sync {
    /// Stage a new record for insertion
    fn add(&mut self, example: Example);

    /// Stage an existing record for a full update
    fn update(&mut self, example: Example);

    /// Stage an existing record for physical deletion
    fn remove(&mut self, example: Example);

    /// Find example by ID
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Example>>;

    /// List every example in store order
    async fn get_all(&self) -> AppResult<Vec<Example>>;

    /// Find example holding exactly this email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Example>>;

    /// Count examples matching the filter predicates
    async fn count_by_filter(&self, filter: &ExampleFilter) -> AppResult<u64>;

    /// First example matching the filter predicates, store order
    async fn get_by_filter(&self, filter: &ExampleFilter) -> AppResult<Option<Example>>;

    /// Matching examples, ordered and paginated as the filter asks
    async fn list_by_filter(&self, filter: &ExampleFilter) -> AppResult<Vec<Example>>;

    /// Apply staged changes atomically
    async fn save(&mut self) -> AppResult<SaveSummary>;
}

#[derive(Debug)]
enum PendingChange {
    Insert(Example),
    Update(Example),
    Delete(i64),
}

/// Concrete implementation of ExampleRepository
pub struct ExampleStore {
    db: DatabaseConnection,
    pending: Vec<PendingChange>,
}

impl ExampleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pending: Vec::new(),
        }
    }

    /// Number of staged changes not yet saved
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for ExampleStore {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(
                discarded = self.pending.len(),
                "Discarding unsaved example changes"
            );
        }
    }
}

#[async_trait]
impl ExampleRepository for ExampleStore {
    fn add(&mut self, example: Example) {
        self.pending.push(PendingChange::Insert(example));
    }

    fn update(&mut self, example: Example) {
        self.pending.push(PendingChange::Update(example));
    }

    fn remove(&mut self, example: Example) {
        self.pending.push(PendingChange::Delete(example.id));
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Example>> {
        let result = ExampleEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Example::from))
    }

    async fn get_all(&self) -> AppResult<Vec<Example>> {
        let models = ExampleEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Example::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Example>> {
        let result = ExampleEntity::find()
            .filter(example::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Example::from))
    }

    async fn count_by_filter(&self, filter: &ExampleFilter) -> AppResult<u64> {
        filtered(filter)
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn get_by_filter(&self, filter: &ExampleFilter) -> AppResult<Option<Example>> {
        let result = filtered(filter)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Example::from))
    }

    async fn list_by_filter(&self, filter: &ExampleFilter) -> AppResult<Vec<Example>> {
        let query = paginated(sorted(filtered(filter), filter), filter);
        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Example::from).collect())
    }

    async fn save(&mut self) -> AppResult<SaveSummary> {
        if self.pending.is_empty() {
            return Ok(SaveSummary::default());
        }

        let changes = std::mem::take(&mut self.pending);
        let txn = self.db.begin().await.map_err(AppError::from)?;
        let mut summary = SaveSummary::default();

        for change in changes {
            if let Err(e) = apply_change(&txn, change, &mut summary).await {
                // Rollback on error
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                return Err(AppError::from_commit(e));
            }
        }

        txn.commit().await.map_err(AppError::from_commit)?;
        tracing::debug!(affected = summary.affected, "Saved example changes");

        Ok(summary)
    }
}

async fn apply_change<C>(conn: &C, change: PendingChange, summary: &mut SaveSummary) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    match change {
        PendingChange::Insert(example) => {
            let model = ActiveModel::without_key(example).insert(conn).await?;
            summary.inserted_ids.push(model.id);
            summary.affected += 1;
        }
        PendingChange::Update(example) => {
            let id = example.id;
            let result = ExampleEntity::update_many()
                .set(ActiveModel::without_key(example))
                .filter(example::Column::Id.eq(id))
                .exec(conn)
                .await?;
            summary.affected += result.rows_affected;
        }
        PendingChange::Delete(id) => {
            let result = ExampleEntity::delete_by_id(id).exec(conn).await?;
            summary.affected += result.rows_affected;
        }
    }

    Ok(())
}

// =============================================================================
// Query shaping
// =============================================================================

/// Conjunctive filter predicates: exact id, then substring matches.
pub(crate) fn filtered(filter: &ExampleFilter) -> Select<ExampleEntity> {
    let mut query = ExampleEntity::find();

    if filter.id > 0 {
        query = query.filter(example::Column::Id.eq(filter.id));
    }

    for (field, term) in filter.text_terms() {
        if let Some(term) = term {
            query = query.filter(contains(column(field), term));
        }
    }

    query
}

/// Single-key ordering, unrecognized `order_by` keeps store order.
pub(crate) fn sorted(query: Select<ExampleEntity>, filter: &ExampleFilter) -> Select<ExampleEntity> {
    match filter.sort() {
        Some(sort) => {
            let order = match sort.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query.order_by(column(sort.field), order)
        }
        None => query,
    }
}

/// Skip/take window, applied only when a page was requested.
pub(crate) fn paginated(
    query: Select<ExampleEntity>,
    filter: &ExampleFilter,
) -> Select<ExampleEntity> {
    if filter.is_paginated() {
        query.offset(filter.offset()).limit(filter.limit())
    } else {
        query
    }
}

fn column(field: ExampleField) -> example::Column {
    match field {
        ExampleField::FirstName => example::Column::FirstName,
        ExampleField::Surname => example::Column::Surname,
        ExampleField::Email => example::Column::Email,
    }
}

/// Substring match treating `%`, `_` and `\` in the term literally.
fn contains(column: example::Column, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(term));
    column.like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
