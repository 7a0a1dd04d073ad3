//! Todo priority - cyclic priority rotation
//!
//! Rotates a todo's priority through a fixed cycle of levels
//! (`low -> medium -> high -> low`). The cycle is a circular singly-linked
//! list seeded once and read-only afterwards.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod cycle;
pub mod log;
pub mod todo;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cycle::config::PriorityConfig;
pub use cycle::list::{CircularList, CircularNode, Cursor};
pub use cycle::priority::{next_priority, PriorityCycle, DEFAULT_LEVELS};
pub use log::{RotationLog, RotationRecord};
pub use todo::{Rotation, Todo};
