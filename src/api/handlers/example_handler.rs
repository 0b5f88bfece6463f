//! Example handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{ExampleDraft, ExampleFilter, ExampleResponse};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, CreatedId, NoContent, Page};

/// Create example routes
pub fn example_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_examples).post(create_example))
        .route(
            "/:id",
            get(get_example).put(update_example).delete(delete_example),
        )
}

/// Missing or unreadable request bodies are reported like an absent entity.
fn require_body(body: Option<Json<ExampleDraft>>) -> AppResult<ExampleDraft> {
    body.map(|Json(draft)| draft)
        .ok_or_else(|| AppError::validation("Example is null."))
}

/// List examples matching the query-string filter
pub async fn list_examples(
    State(state): State<AppState>,
    Query(filter): Query<ExampleFilter>,
) -> AppResult<Json<Page<ExampleResponse>>> {
    let page = state.example_service.list_by_filter(filter).await?;
    Ok(Json(page.map(ExampleResponse::from)))
}

/// Get a single example by ID
pub async fn get_example(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ExampleResponse>> {
    if id <= 0 {
        return Err(AppError::validation("Invalid id."));
    }

    let example = state
        .example_service
        .get_by_filter(ExampleFilter::by_id(id))
        .await?
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(ExampleResponse::from(example)))
}

/// Create a new example
pub async fn create_example(
    State(state): State<AppState>,
    body: Option<Json<ExampleDraft>>,
) -> AppResult<Created<CreatedId>> {
    let draft = require_body(body)?;
    let id = state.example_service.create(draft).await?;
    Ok(Created(CreatedId { id }))
}

/// Replace an existing example's fields
pub async fn update_example(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Option<Json<ExampleDraft>>,
) -> AppResult<NoContent> {
    let draft = require_body(body)?;
    state.example_service.update(id, draft).await?;
    Ok(NoContent)
}

/// Delete an example
pub async fn delete_example(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.example_service.delete(id).await?;
    Ok(NoContent)
}
