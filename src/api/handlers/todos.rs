//! Todo management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::extract::JsonBody;
use crate::db::{Database, DbError, FieldUpdate, Id, Todo, TodoPatch};

use super::ErrorResponse;

type HandlerError = (StatusCode, Json<ErrorResponse>);

// =============================================================================
// DTOs
// =============================================================================

/// Todo response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "buy milk")]
    pub title: String,
    #[schema(example = false)]
    pub completed: bool,
    /// Creation time (RFC3339)
    pub created_at: DateTime<Utc>,
    /// Time of the last update (RFC3339)
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create todo request DTO
///
/// A missing or `null` title creates a todo with an empty title.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "crate::serde_utils::null_as_empty")]
    #[schema(value_type = Option<String>, example = "buy milk")]
    pub title: String,
}

/// Update todo request DTO (partial update)
///
/// Omitted fields keep their stored value; `null` is rejected.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "buy oat milk")]
    pub title: FieldUpdate<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>, example = true)]
    pub completed: FieldUpdate<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title: req.title,
            completed: req.completed,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
///
/// Returns every todo ordered by ascending id
#[utoipa::path(
    get,
    path = "/todos",
    tag = "todos",
    responses(
        (status = 200, description = "List of todos", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, HandlerError> {
    let todos = state.todos().list().await.map_err(internal_error)?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, HandlerError> {
    let todo_id = parse_id(&id).ok_or_else(|| not_found(&id))?;

    let todo = state
        .todos()
        .get(todo_id)
        .await
        .map_err(|e| db_error(e, &id))?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Create a new todo
///
/// The todo starts out not completed, with equal created_at and updated_at
#[utoipa::path(
    post,
    path = "/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), HandlerError> {
    let todo = state
        .todos()
        .create(&req.title)
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// Update a todo
///
/// Updates only the fields provided in the request. updated_at is refreshed
/// on every call, even when no field is provided.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, HandlerError> {
    let todo_id = parse_id(&id).ok_or_else(|| not_found(&id))?;

    let todo = state
        .todos()
        .update(todo_id, req.into())
        .await
        .map_err(|e| db_error(e, &id))?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Delete a todo
///
/// Responds 204 whether or not the todo existed. A non-numeric id is 404,
/// as for get and update.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted (or already absent)"),
        (status = 404, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    let todo_id = parse_id(&id).ok_or_else(|| not_found(&id))?;

    state
        .todos()
        .delete(todo_id)
        .await
        .map_err(internal_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_id(raw: &str) -> Option<Id> {
    raw.parse().ok()
}

fn not_found(id: &str) -> HandlerError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Todo '{}' not found", id),
        }),
    )
}

fn internal_error(e: DbError) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn db_error(e: DbError, id: &str) -> HandlerError {
    match e {
        DbError::NotFound { .. } => not_found(id),
        _ => internal_error(e),
    }
}
