pub mod api_client;
mod commands;
pub mod error;
mod utils;


use clap::{Parser, Subcommand};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Todo list client", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: TODO_API_URL env or http://localhost:8080)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all todos
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one todo
    Get {
        /// Todo ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a new todo
    Add {
        /// Todo title
        title: String,
    },
    /// Flip the completed flag of a todo
    Toggle {
        /// Todo ID
        id: i64,
    },
    /// Change the title of a todo
    Rename {
        /// Todo ID
        id: i64,
        /// New title
        title: String,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },
}

async fn execute(api_client: &ApiClient, command: Commands) -> CliResult<String> {
    match command {
        Commands::List { format } => commands::todo::list_todos(api_client, &format).await,
        Commands::Get { id, format } => commands::todo::get_todo(api_client, id, &format).await,
        Commands::Add { title } => commands::todo::add_todo(api_client, &title).await,
        Commands::Toggle { id } => commands::todo::toggle_todo(api_client, id).await,
        Commands::Rename { id, title } => {
            commands::todo::rename_todo(api_client, id, &title).await
        }
        Commands::Delete { id } => commands::todo::delete_todo(api_client, id).await,
    }
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url);

    match cli.command {
        Some(command) => {
            let output = execute(&api_client, command).await?;
            println!("{}", output);
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["todo", "--help"]);
        }
    }

    Ok(())
}
