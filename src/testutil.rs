//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::log::jsonl::RotationRecord;
use chrono::Utc;

/// Create a `RotationRecord` with no todo attached.
#[must_use]
pub fn make_test_record(from: &str, to: &str) -> RotationRecord {
    RotationRecord {
        timestamp: Utc::now(),
        from: from.to_string(),
        to: to.to_string(),
        todo_id: None,
    }
}
