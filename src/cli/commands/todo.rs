use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{
    apply_table_style, format_completed, format_timestamp, truncate_with_ellipsis,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTodoRequest {
    pub(crate) title: String,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateTodoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) completed: Option<bool>,
}

#[derive(Tabled)]
pub(crate) struct TodoDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Done")]
    pub(crate) completed: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Updated")]
    pub(crate) updated_at: String,
}

impl From<&Todo> for TodoDisplay {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            completed: format_completed(todo.completed),
            title: truncate_with_ellipsis(&todo.title, 50),
            updated_at: format_timestamp(&todo.updated_at),
        }
    }
}

/// List all todos
pub async fn list_todos(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/todos").send().await?;
    let todos: Vec<Todo> = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todos)?),
        _ => Ok(format_table(&todos)),
    }
}

pub(crate) fn format_table(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos yet!".to_string();
    }

    let display_todos: Vec<TodoDisplay> = todos.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display_todos);
    apply_table_style(&mut table);
    table.to_string()
}

pub(crate) fn format_detail(todo: &Todo) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["ID", &todo.id.to_string()]);
    builder.push_record(["Title", &todo.title]);
    builder.push_record(["Completed", if todo.completed { "yes" } else { "no" }]);
    builder.push_record(["Created", &format_timestamp(&todo.created_at)]);
    builder.push_record(["Updated", &format_timestamp(&todo.updated_at)]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

async fn fetch_todo(api_client: &ApiClient, id: i64) -> CliResult<Todo> {
    let response = api_client.get(&format!("/todos/{}", id)).send().await?;
    ApiClient::handle_response(response)
        .await
        .map_err(|e| e.for_todo(id))
}

async fn send_update(
    api_client: &ApiClient,
    id: i64,
    request_body: &UpdateTodoRequest,
) -> CliResult<Todo> {
    let response = api_client
        .put(&format!("/todos/{}", id))
        .json(request_body)
        .send()
        .await?;
    ApiClient::handle_response(response)
        .await
        .map_err(|e| e.for_todo(id))
}

/// Get a single todo by ID
pub async fn get_todo(api_client: &ApiClient, id: i64, format: &str) -> CliResult<String> {
    let todo = fetch_todo(api_client, id).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todo)?),
        _ => Ok(format_detail(&todo)),
    }
}

/// Create a new todo
pub async fn add_todo(api_client: &ApiClient, title: &str) -> CliResult<String> {
    let request_body = CreateTodoRequest {
        title: title.to_string(),
    };

    let response = api_client.post("/todos").json(&request_body).send().await?;

    let todo: Todo = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Added todo: {} ({})", todo.title, todo.id))
}

/// Flip the completed flag: read the current value, then write its inverse
pub async fn toggle_todo(api_client: &ApiClient, id: i64) -> CliResult<String> {
    let current = fetch_todo(api_client, id).await?;

    let request_body = UpdateTodoRequest {
        completed: Some(!current.completed),
        ..Default::default()
    };
    let todo = send_update(api_client, id, &request_body).await?;

    let state = if todo.completed { "done" } else { "not done" };
    Ok(format!("✓ Todo {} marked as {}", todo.id, state))
}

/// Change the title of a todo
pub async fn rename_todo(api_client: &ApiClient, id: i64, title: &str) -> CliResult<String> {
    let request_body = UpdateTodoRequest {
        title: Some(title.to_string()),
        ..Default::default()
    };
    let todo = send_update(api_client, id, &request_body).await?;

    Ok(format!("✓ Renamed todo {}: {}", todo.id, todo.title))
}

/// Delete a todo
pub async fn delete_todo(api_client: &ApiClient, id: i64) -> CliResult<String> {
    let response = api_client.delete(&format!("/todos/{}", id)).send().await?;
    ApiClient::handle_empty_response(response).await?;

    Ok(format!("✓ Deleted todo {}", id))
}
