//! Priority cycle
//!
//! This module holds the circular list, the priority cycle built on top of
//! it, and the configuration that seeds the cycle.

pub mod config;
pub mod list;
pub mod priority;
