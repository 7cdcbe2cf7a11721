//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::TodoService;

/// Shared application state.
///
/// Generic over `D: Database` so tests can run against an in-memory SQLite
/// database. The database is injected via the constructor, never created
/// internally or held in a global.
pub struct AppState<D: Database> {
    db: Arc<D>,
    todos: TodoService<D>,
}

// Manual Clone impl - we only need Arc to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            todos: self.todos.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given database.
    pub fn new(db: D) -> Self {
        let db = Arc::new(db);
        Self {
            todos: TodoService::new(Arc::clone(&db)),
            db,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get the todo service.
    pub fn todos(&self) -> &TodoService<D> {
        &self.todos
    }
}
