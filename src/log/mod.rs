//! Logging and observability
//!
//! This module provides the JSONL history of applied priority rotations.

pub mod jsonl;

pub use jsonl::{RotationLog, RotationRecord};
