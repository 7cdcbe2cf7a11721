//! Errors surfaced to the `todo` user.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Cannot reach the todo server at {url}")]
    #[diagnostic(
        code(todolist::cli::unreachable),
        help("Start it with `todo-server`, or point --api-url / TODO_API_URL at a running one.")
    )]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Todo {id} does not exist")]
    #[diagnostic(
        code(todolist::cli::todo_not_found),
        help("Run `todo list` to see the existing ids.")
    )]
    TodoNotFound { id: i64 },

    #[error("Server answered {status}: {message}")]
    #[diagnostic(code(todolist::cli::server_error))]
    Server { status: u16, message: String },

    #[error("Could not read the server's reply: {message}")]
    #[diagnostic(code(todolist::cli::bad_reply))]
    BadReply { message: String },

    #[error("Could not render todos as JSON")]
    #[diagnostic(code(todolist::cli::render))]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Turn a 404 from a `/todos/{id}` route into `TodoNotFound`.
    pub fn for_todo(self, id: i64) -> Self {
        match self {
            CliError::Server { status: 404, .. } => CliError::TodoNotFound { id },
            other => other,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            CliError::Unreachable { url, source: e }
        } else {
            CliError::BadReply {
                message: e.to_string(),
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
