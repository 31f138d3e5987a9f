// ABOUTME: Library root for deploy-tracker - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod github;
pub mod output;
pub mod state;
pub mod types;
