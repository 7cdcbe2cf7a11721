//! Domain models for the todo database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer ID assigned by storage on insert. Never reused after deletion.
pub type Id = i64;

/// A single task record with a title and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Id,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Partial Updates
// =============================================================================

/// A single field of a partial update.
///
/// `Unset` leaves the stored value alone; `Set` overwrites it. Deserializing
/// a present field yields `Set`, an absent one falls back to `Unset` through
/// `#[serde(default)]`, and an explicit `null` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Unset,
    Set(T),
}

// Manual impl - derive would require T: Default
impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unset
    }
}

impl<T> FieldUpdate<T> {
    /// Overwrite `target` when this update carries a value.
    pub fn apply_to(self, target: &mut T) {
        if let FieldUpdate::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Unset,
        }
    }
}

/// Partial update of a todo. `updated_at` is refreshed even when both fields are unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoPatch {
    pub title: FieldUpdate<String>,
    pub completed: FieldUpdate<bool>,
}

impl TodoPatch {
    pub fn merge_into(self, target: &mut Todo) {
        self.title.apply_to(&mut target.title);
        self.completed.apply_to(&mut target.completed);
    }
}
