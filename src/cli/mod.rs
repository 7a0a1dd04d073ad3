//! CLI output formatting
//!
//! Provides human-readable, colored terminal display for the priority cycle
//! and its rotation history.

pub mod display;

pub use display::{
    format_levels, format_record, print_cycle, print_history, print_rotation, print_unknown_level,
};
