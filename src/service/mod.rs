//! Todo service: the five operations the HTTP layer exposes.
//!
//! The service owns no state of its own beyond the injected database handle.
//! Every operation is a single round-trip (update is a read followed by a
//! write) with no locking; concurrent writers to one todo are last-writer-wins.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::db::utils::next_timestamp;
use crate::db::{Database, DbResult, Id, Todo, TodoPatch, TodoRepository};


/// Todo operations over any [`Database`] implementation.
pub struct TodoService<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc is cloned, D need not be Clone
impl<D: Database> Clone for TodoService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TodoService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// All todos ordered by ascending id. An empty table yields an empty vector.
    #[instrument(skip(self))]
    pub async fn list(&self) -> DbResult<Vec<Todo>> {
        self.db.todos().list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> DbResult<Todo> {
        self.db.todos().get(id).await
    }

    /// Store a new, not yet completed todo and return the stored record.
    #[instrument(skip(self))]
    pub async fn create(&self, title: &str) -> DbResult<Todo> {
        let todo = self.db.todos().create(title).await?;
        info!(id = todo.id, "Created todo");
        Ok(todo)
    }

    /// Apply a partial update.
    ///
    /// Only fields set in `patch` change, but `updated_at` always moves forward,
    /// including for an empty patch.
    #[instrument(skip(self))]
    pub async fn update(&self, id: Id, patch: TodoPatch) -> DbResult<Todo> {
        let repo = self.db.todos();
        let mut todo = repo.get(id).await?;

        patch.merge_into(&mut todo);
        todo.updated_at = next_timestamp(todo.updated_at);

        repo.update(&todo).await?;
        debug!(id, completed = todo.completed, "Updated todo");
        Ok(todo)
    }

    /// Hard-delete a todo.
    ///
    /// A missing id is not an error: the todo is absent afterwards either way.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Id) -> DbResult<()> {
        if self.db.todos().delete(id).await? {
            info!(id, "Deleted todo");
        } else {
            debug!(id, "Delete matched no todo");
        }
        Ok(())
    }
}
