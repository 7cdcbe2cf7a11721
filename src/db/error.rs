//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(todolist::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todolist::db::database_error))]
    Database { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(
        code(todolist::db::schema_error),
        help("The todos table could not be created. Check that the database file is writable.")
    )]
    Schema { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todolist::db::connection_error),
        help("Check the --db path or the TODO_DB environment variable.")
    )]
    Connection { message: String },
}

impl DbError {
    /// Shorthand for a missing todo.
    pub fn todo_not_found(id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: "Todo".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
