//! Shared utilities for CLI commands

use chrono::{DateTime, Utc};
use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
///
/// With `max < 3` the result is just the ellipsis.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Checkbox-style marker for the completed flag
pub fn format_completed(completed: bool) -> String {
    if completed { "✓" } else { " " }.to_string()
}

/// Format a timestamp for table output (second precision, UTC)
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
