//! Priority configuration parser
//!
//! Parses `priorities.toml` into the ordered seed sequence of a cycle.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cycle::priority::{PriorityCycle, DEFAULT_LEVELS};
use crate::todo::Todo;

/// The `[priorities]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrioritySection {
    /// Levels in rotation order; the last one wraps to the first
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
    /// Priority given to new todos. Falls back to the first level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

fn default_levels() -> Vec<String> {
    DEFAULT_LEVELS.iter().map(ToString::to_string).collect()
}

impl Default for PrioritySection {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            default: None,
        }
    }
}

/// Top-level configuration parsed from priorities.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityConfig {
    /// Priority levels
    #[serde(default)]
    pub priorities: PrioritySection,
}

impl PriorityConfig {
    /// Parse a priorities.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse priorities.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse priorities.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Build the rotation cycle from the configured levels
    #[must_use]
    pub fn build_cycle(&self) -> PriorityCycle<String> {
        PriorityCycle::from_seed(self.priorities.levels.iter().cloned())
    }

    /// Priority for new todos: the explicit `default`, else the first level
    #[must_use]
    pub fn default_level(&self) -> &str {
        self.priorities
            .default
            .as_deref()
            .or_else(|| self.priorities.levels.first().map(String::as_str))
            .unwrap_or(DEFAULT_LEVELS[0])
    }

    /// Create an open todo at the default level
    #[must_use]
    pub fn new_todo(&self, id: u64, description: &str) -> Todo {
        Todo::new(id, description, self.default_level())
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let levels = &self.priorities.levels;

        if levels.is_empty() {
            bail!("At least one priority level is required");
        }

        for level in levels {
            if level.trim().is_empty() {
                bail!("Priority level cannot be empty");
            }
        }

        // A repeated level would make rotation ambiguous: only the first
        // occurrence is ever found.
        let mut seen = HashSet::new();
        for level in levels {
            if !seen.insert(level.as_str()) {
                bail!("Duplicate priority level: '{level}'");
            }
        }

        if let Some(default) = &self.priorities.default {
            if !seen.contains(default.as_str()) {
                bail!("Default priority '{default}' is not one of the configured levels");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
[priorities]
levels = ["low", "medium", "high", "urgent"]
default = "medium"
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = PriorityConfig::parse(VALID_CONFIG).unwrap();

        assert_eq!(
            config.priorities.levels,
            vec!["low", "medium", "high", "urgent"]
        );
        assert_eq!(config.priorities.default.as_deref(), Some("medium"));
    }

    #[test]
    fn test_default_config_matches_builtin_levels() {
        let config = PriorityConfig::default();
        assert_eq!(config.priorities.levels, vec!["low", "medium", "high"]);
        assert_eq!(config.default_level(), "low");
    }

    #[test]
    fn test_empty_file_uses_builtin_levels() {
        let config = PriorityConfig::parse("").unwrap();
        assert_eq!(config, PriorityConfig::default());
    }

    #[test]
    fn test_missing_levels_key_uses_builtin_levels() {
        let config = PriorityConfig::parse("[priorities]\ndefault = \"high\"\n").unwrap();
        assert_eq!(config.priorities.levels, vec!["low", "medium", "high"]);
        assert_eq!(config.default_level(), "high");
    }

    #[test]
    fn test_default_level_falls_back_to_first_level() {
        let toml = r#"
[priorities]
levels = ["minor", "major"]
"#;
        let config = PriorityConfig::parse(toml).unwrap();
        assert_eq!(config.default_level(), "minor");
    }

    #[test]
    fn test_build_cycle_wraps_last_level() {
        let config = PriorityConfig::parse(VALID_CONFIG).unwrap();
        let cycle = config.build_cycle();

        assert_eq!(cycle.successor_of("high").map(String::as_str), Some("urgent"));
        assert_eq!(cycle.successor_of("urgent").map(String::as_str), Some("low"));
    }

    #[test]
    fn test_new_todo_starts_at_explicit_default() {
        let config = PriorityConfig::parse(VALID_CONFIG).unwrap();
        let todo = config.new_todo(3, "Plan sprint");
        assert_eq!(todo.priority, "medium");
        assert!(config.build_cycle().contains(todo.priority.as_str()));
    }

    #[test]
    fn test_new_todo_with_builtin_levels() {
        let todo = PriorityConfig::default().new_todo(1, "Write docs");
        assert_eq!(todo.priority, "low");
    }

    #[test]
    fn test_single_level_config() {
        let config = PriorityConfig::parse("[priorities]\nlevels = [\"only\"]\n").unwrap();
        let cycle = config.build_cycle();
        assert_eq!(cycle.successor_of("only").map(String::as_str), Some("only"));
    }

    #[test]
    fn test_reject_empty_levels() {
        let err = PriorityConfig::parse("[priorities]\nlevels = []\n").unwrap_err();
        assert!(
            err.to_string().contains("At least one"),
            "Expected 'At least one' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_blank_level() {
        let err = PriorityConfig::parse("[priorities]\nlevels = [\"low\", \"  \"]\n").unwrap_err();
        assert!(
            err.to_string().contains("empty"),
            "Expected 'empty' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_duplicate_levels() {
        let toml = r#"
[priorities]
levels = ["low", "high", "low"]
"#;
        let err = PriorityConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("Duplicate priority level: 'low'"),
            "Expected duplicate error, got: {err}"
        );
    }

    #[test]
    fn test_reject_unknown_default() {
        let toml = r#"
[priorities]
levels = ["low", "high"]
default = "medium"
"#;
        let err = PriorityConfig::parse(toml).unwrap_err();
        assert!(
            err.to_string().contains("not one of the configured levels"),
            "Expected unknown default error, got: {err}"
        );
    }

    #[test]
    fn test_reject_invalid_toml() {
        let err = PriorityConfig::parse("not valid toml {{{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_reject_wrong_level_type() {
        let err = PriorityConfig::parse("[priorities]\nlevels = [1, 2]\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PriorityConfig::from_path("/nonexistent/priorities.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_from_path_valid_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("priorities.toml");
        std::fs::write(&config_path, VALID_CONFIG).unwrap();

        let config = PriorityConfig::from_path(&config_path).unwrap();
        assert_eq!(config.priorities.levels.len(), 4);
    }
}
