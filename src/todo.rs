//! Todo records
//!
//! The record shape exchanged with the todo service. Persisting it is the
//! caller's job; this module only applies priority rotation to it.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::cycle::priority::{PriorityCycle, DEFAULT_LEVELS};

/// A single todo item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Service-assigned identifier
    pub id: u64,
    /// What needs doing
    pub description: String,
    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
    /// Current priority level
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    DEFAULT_LEVELS[0].to_string()
}

/// A priority change applied to a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    /// Priority before the change
    pub from: String,
    /// Priority after the change
    pub to: String,
}

impl Todo {
    /// Create an open todo at `priority`.
    ///
    /// Use [`PriorityConfig::new_todo`](crate::cycle::config::PriorityConfig::new_todo)
    /// to start at the configured default level.
    #[must_use]
    pub fn new(id: u64, description: &str, priority: &str) -> Self {
        Self {
            id,
            description: description.to_string(),
            completed: false,
            priority: priority.to_string(),
        }
    }

    /// Replace the priority level
    #[must_use]
    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = priority.to_string();
        self
    }

    /// Advance the priority to its successor in `cycle`.
    ///
    /// Returns `None` and leaves the todo untouched if the current priority
    /// is not part of the cycle.
    pub fn rotate_priority<T>(&mut self, cycle: &PriorityCycle<T>) -> Option<Rotation>
    where
        T: Borrow<str>,
    {
        let next: &str = cycle.successor_of(self.priority.as_str())?.borrow();
        let from = std::mem::replace(&mut self.priority, next.to_string());
        Some(Rotation {
            from,
            to: next.to_string(),
        })
    }

    /// Flip the completed flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::config::PriorityConfig;

    #[test]
    fn test_new_todo_defaults() {
        let todo = Todo::new(1, "Write tests", "low");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.description, "Write tests");
        assert!(!todo.completed);
        assert_eq!(todo.priority, "low");
    }

    #[test]
    fn test_rotate_through_global_cycle() {
        let cycle = PriorityCycle::<&str>::global();
        let mut todo = Todo::new(1, "Ship it", "low");

        let first = todo.rotate_priority(cycle).unwrap();
        assert_eq!(first.from, "low");
        assert_eq!(first.to, "medium");

        todo.rotate_priority(cycle);
        assert_eq!(todo.priority, "high");

        let wrap = todo.rotate_priority(cycle).unwrap();
        assert_eq!(wrap.from, "high");
        assert_eq!(wrap.to, "low");
        assert_eq!(todo.priority, "low");
    }

    #[test]
    fn test_rotate_with_configured_cycle() {
        let config =
            PriorityConfig::parse("[priorities]\nlevels = [\"p3\", \"p2\", \"p1\"]\n").unwrap();
        let cycle = config.build_cycle();
        let mut todo = Todo::new(7, "Triage", "p3").with_priority("p1");

        let rotation = todo.rotate_priority(&cycle).unwrap();
        assert_eq!(rotation.to, "p3");
        assert_eq!(todo.priority, "p3");
    }

    #[test]
    fn test_configured_todo_rotates_right_after_creation() {
        let config =
            PriorityConfig::parse("[priorities]\nlevels = [\"p3\", \"p2\", \"p1\"]\n").unwrap();
        let cycle = config.build_cycle();
        let mut todo = config.new_todo(1, "Fresh");
        assert_eq!(todo.priority, "p3");

        let rotation = todo.rotate_priority(&cycle).unwrap();
        assert_eq!(rotation.from, "p3");
        assert_eq!(rotation.to, "p2");
    }

    #[test]
    fn test_unknown_priority_leaves_todo_unchanged() {
        let mut todo = Todo::new(2, "Mystery", "urgent");
        let before = todo.clone();

        assert!(todo.rotate_priority(PriorityCycle::<&str>::global()).is_none());
        assert_eq!(todo, before);
    }

    #[test]
    fn test_toggle_completed() {
        let mut todo = Todo::new(3, "Check box", "low");
        todo.toggle_completed();
        assert!(todo.completed);
        todo.toggle_completed();
        assert!(!todo.completed);
    }

    #[test]
    fn test_deserialize_service_payload() {
        let json = r#"{"id": 5, "description": "Test todo", "completed": true, "priority": "high"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 5);
        assert!(todo.completed);
        assert_eq!(todo.priority, "high");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let todo: Todo = serde_json::from_str(r#"{"id": 9, "description": "Bare"}"#).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.priority, "low");
    }
}
