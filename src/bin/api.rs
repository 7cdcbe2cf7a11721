//! Todolist API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use todolist::api::{self, ApiError, Config, DEFAULT_PORT};
use todolist::db::{Database, DbError, SqliteDatabase};
use todolist::paths::get_db_path;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todolist::binary::database))]
    Database(#[from] DbError),

    #[error("No database path configured")]
    #[diagnostic(
        code(todolist::binary::no_db_path),
        help("Pass --db, set TODO_DB, or set HOME/XDG_DATA_HOME so a default path can be derived.")
    )]
    NoDbPath,

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todolist::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(todolist::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(author, version, about = "Todo list API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TODO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Database file path (defaults to XDG data directory: ~/.local/share/todolist/todos.db)
    #[arg(long, env = "TODO_DB")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    // Create the concrete database implementation
    let db_path = cli.db.or_else(get_db_path).ok_or(BinaryError::NoDbPath)?;

    info!("Opening database at {}", db_path.display());

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // The schema must exist before the first request is accepted
    db.migrate().await?;
    info!("Database schema ready");

    // Pass the abstract Database to the API layer
    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
