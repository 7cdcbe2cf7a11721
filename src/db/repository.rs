//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use std::future::Future;

use crate::db::{DbResult, Id, Todo};

/// Repository for Todo operations.
pub trait TodoRepository {
    /// Insert a todo with `completed = false` and fresh timestamps.
    fn create(&self, title: &str) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get all todos, ordered by ascending ID.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Persist title, completed and updated_at of an existing todo.
    fn update(&self, todo: &Todo) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a todo by ID. Returns whether a row was removed.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Todos<'a>: TodoRepository + Send + Sync
    where
        Self: 'a;

    /// Create the schema if it does not exist yet.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Round-trip a trivial query to check the storage is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
