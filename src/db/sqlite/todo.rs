//! SQLite TodoRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::utils::current_timestamp;
use crate::db::{DbError, DbResult, Id, Todo, TodoRepository};

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn create(&self, title: &str) -> DbResult<Todo> {
        // Both timestamps share one reading so a fresh todo has created_at == updated_at
        let now = current_timestamp();

        let row = sqlx::query(
            r#"
            INSERT INTO todos (title, completed, created_at, updated_at)
            VALUES (?, 0, ?, ?)
            RETURNING id, title, completed, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        row_to_todo(&row)
    }

    async fn get(&self, id: Id) -> DbResult<Todo> {
        let row = sqlx::query(
            "SELECT id, title, completed, created_at, updated_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        let row = row.ok_or_else(|| DbError::todo_not_found(id))?;

        row_to_todo(&row)
    }

    async fn list(&self) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query(
            "SELECT id, title, completed, created_at, updated_at FROM todos ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn update(&self, todo: &Todo) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?, completed = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&todo.title)
        .bind(todo.completed)
        .bind(todo.updated_at)
        .bind(todo.id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found(todo.id));
        }

        Ok(())
    }

    async fn delete(&self, id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert a database row to a Todo model.
fn row_to_todo(row: &SqliteRow) -> DbResult<Todo> {
    let decode = |e: sqlx::Error| DbError::Database {
        message: e.to_string(),
    };

    Ok(Todo {
        id: row.try_get("id").map_err(decode)?,
        title: row.try_get("title").map_err(decode)?,
        completed: row.try_get("completed").map_err(decode)?,
        created_at: row.try_get("created_at").map_err(decode)?,
        updated_at: row.try_get("updated_at").map_err(decode)?,
    })
}
