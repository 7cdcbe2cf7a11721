//! Database utility functions.

use chrono::{DateTime, Duration, Utc};

/// Get the current UTC time.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp for a mutation of a record last touched at `previous`.
///
/// Always strictly later than `previous`, even if the wall clock has not
/// advanced (or has stepped backwards) since.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = current_timestamp();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
