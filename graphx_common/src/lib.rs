//! Common configuration and shared types for the graphx workspace.
//!
//! This crate provides the search configuration consumed by the matcher and
//! the CLI, and a collection of test cases used across the workspace.

mod config;
mod test_cases;

pub use crate::config::*;
pub use crate::test_cases::*;
