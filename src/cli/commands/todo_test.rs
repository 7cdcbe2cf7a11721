use crate::api::{AppState, routes};
use crate::cli::api_client::ApiClient;
use crate::cli::commands::todo::*;
use crate::cli::error::CliError;
use crate::db::{Database, SqliteDatabase};
use chrono::{TimeZone, Utc};
use tokio::net::TcpListener;

fn sample_todo(id: i64, title: &str, completed: bool) -> Todo {
    let ts = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    Todo {
        id,
        title: title.to_string(),
        completed,
        created_at: ts,
        updated_at: ts,
    }
}

// =============================================================================
// Request serialization
// =============================================================================

#[test]
fn test_update_request_omits_unset_fields() {
    let req = UpdateTodoRequest {
        completed: Some(true),
        ..Default::default()
    };

    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"completed":true}"#);
}

#[test]
fn test_update_request_title_only() {
    let req = UpdateTodoRequest {
        title: Some("new title".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"title":"new title"}"#);
}

// =============================================================================
// Output formatting
// =============================================================================

#[test]
fn test_format_table_empty() {
    assert_eq!(format_table(&[]), "No todos yet!");
}

#[test]
fn test_format_table_lists_rows() {
    let todos = vec![
        sample_todo(1, "buy milk", true),
        sample_todo(2, "walk dog", false),
    ];

    let output = format_table(&todos);

    assert!(output.contains("ID"));
    assert!(output.contains("buy milk"));
    assert!(output.contains("walk dog"));
    assert!(output.contains("✓"));
    assert!(output.contains("2025-01-01 12:00:00"));
}

#[test]
fn test_format_table_truncates_long_titles() {
    let long_title = "x".repeat(80);
    let output = format_table(&[sample_todo(1, &long_title, false)]);

    assert!(!output.contains(&long_title));
    assert!(output.contains(&format!("{}...", "x".repeat(47))));
}

#[test]
fn test_format_detail_shows_all_fields() {
    let output = format_detail(&sample_todo(7, "read book", false));

    assert!(output.contains("read book"));
    assert!(output.contains('7'));
    assert!(output.contains("no"));
    assert!(output.contains("Created"));
}

// =============================================================================
// Integration Tests - Test CLI commands against real HTTP server
// =============================================================================

/// Spawn a test HTTP server with in-memory database
async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to create schema");

    let app = routes::create_router(AppState::new(db));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_todos_empty_integration() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let output = list_todos(&api_client, "table").await.unwrap();
    assert_eq!(output, "No todos yet!");

    let json = list_todos(&api_client, "json").await.unwrap();
    assert_eq!(json, "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_and_get_todo_integration() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let output = add_todo(&api_client, "buy milk").await.unwrap();
    assert_eq!(output, "✓ Added todo: buy milk (1)");

    let json = get_todo(&api_client, 1, "json").await.unwrap();
    let todo: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(todo["title"], "buy milk");
    assert_eq!(todo["completed"], false);

    let table = get_todo(&api_client, 1, "table").await.unwrap();
    assert!(table.contains("buy milk"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_toggle_todo_flips_completed_integration() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    add_todo(&api_client, "walk dog").await.unwrap();

    let output = toggle_todo(&api_client, 1).await.unwrap();
    assert_eq!(output, "✓ Todo 1 marked as done");

    let output = toggle_todo(&api_client, 1).await.unwrap();
    assert_eq!(output, "✓ Todo 1 marked as not done");

    let json = get_todo(&api_client, 1, "json").await.unwrap();
    let todo: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(todo["title"], "walk dog");
    assert_eq!(todo["completed"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rename_todo_keeps_completed_integration() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    add_todo(&api_client, "old title").await.unwrap();
    toggle_todo(&api_client, 1).await.unwrap();

    let output = rename_todo(&api_client, 1, "new title").await.unwrap();
    assert_eq!(output, "✓ Renamed todo 1: new title");

    let json = get_todo(&api_client, 1, "json").await.unwrap();
    let todo: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(todo["title"], "new title");
    assert_eq!(todo["completed"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_todo_integration() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    add_todo(&api_client, "temporary").await.unwrap();

    let output = delete_todo(&api_client, 1).await.unwrap();
    assert_eq!(output, "✓ Deleted todo 1");

    let result = get_todo(&api_client, 1, "json").await;
    assert!(matches!(result, Err(CliError::TodoNotFound { id: 1 })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_toggle_missing_todo_reports_not_found() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let result = toggle_todo(&api_client, 99).await;

    assert!(matches!(result, Err(CliError::TodoNotFound { id: 99 })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rename_missing_todo_reports_not_found() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let result = rename_todo(&api_client, 7, "anything").await;

    match result {
        Err(e @ CliError::TodoNotFound { .. }) => {
            assert_eq!(e.to_string(), "Todo 7 does not exist");
        }
        other => panic!("Expected TodoNotFound, got {:?}", other),
    }
}

#[test]
fn test_for_todo_keeps_non_404_server_errors() {
    let err = CliError::Server {
        status: 500,
        message: "no such table: todos".to_string(),
    }
    .for_todo(3);

    match err {
        CliError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "no such table: todos");
        }
        other => panic!("Expected Server error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_server_reports_its_url() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api_client = ApiClient::new(Some(format!("http://{}", addr)));
    let result = list_todos(&api_client, "table").await;

    match result {
        Err(CliError::Unreachable { url, .. }) => {
            assert!(url.contains(&addr.port().to_string()), "url was {}", url);
        }
        other => panic!("Expected Unreachable, got {:?}", other),
    }
}
