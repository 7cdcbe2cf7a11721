//! Tests for domain models.

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::db::models::*;

/// Request-shaped struct, the way the HTTP layer declares partial updates
#[derive(Debug, Deserialize)]
struct Patch {
    #[serde(default)]
    title: FieldUpdate<String>,
    #[serde(default)]
    completed: FieldUpdate<bool>,
}

fn sample_todo() -> Todo {
    let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Todo {
        id: 1,
        title: "buy milk".to_string(),
        completed: false,
        created_at: ts,
        updated_at: ts,
    }
}

#[test]
fn todo_serializes_timestamps_as_rfc3339() {
    let value = serde_json::to_value(sample_todo()).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["title"], "buy milk");
    assert_eq!(value["completed"], false);
    assert_eq!(value["created_at"], "2025-01-01T00:00:00Z");
    assert_eq!(value["updated_at"], "2025-01-01T00:00:00Z");
}

#[test]
fn patch_absent_fields_are_unset() {
    let patch: Patch = serde_json::from_value(json!({})).unwrap();
    assert_eq!(patch.title, FieldUpdate::Unset);
    assert_eq!(patch.completed, FieldUpdate::Unset);
}

#[test]
fn patch_present_fields_are_set() {
    let patch: Patch =
        serde_json::from_value(json!({"title": "", "completed": true})).unwrap();
    assert_eq!(patch.title, FieldUpdate::Set(String::new()));
    assert_eq!(patch.completed, FieldUpdate::Set(true));
}

#[test]
fn patch_rejects_explicit_null() {
    let err = serde_json::from_value::<Patch>(json!({"completed": null})).unwrap_err();
    assert!(err.to_string().contains("null is not allowed"));
}

#[test]
fn patch_rejects_wrong_type() {
    assert!(serde_json::from_value::<Patch>(json!({"completed": "yes"})).is_err());
    assert!(serde_json::from_value::<Patch>(json!({"title": 3})).is_err());
}

#[test]
fn patch_ignores_unknown_fields() {
    let patch: Patch =
        serde_json::from_value(json!({"completed": false, "priority": 9})).unwrap();
    assert_eq!(patch.completed, FieldUpdate::Set(false));
}

#[test]
fn merge_only_touches_set_fields() {
    let mut todo = sample_todo();
    TodoPatch {
        title: FieldUpdate::Unset,
        completed: FieldUpdate::Set(true),
    }
    .merge_into(&mut todo);

    assert_eq!(todo.title, "buy milk");
    assert!(todo.completed);
}

#[test]
fn field_update_from_option() {
    assert_eq!(FieldUpdate::from(Some(3)), FieldUpdate::Set(3));
    assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Unset);
    assert_eq!(FieldUpdate::<String>::default(), FieldUpdate::Unset);
}
