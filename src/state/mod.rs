// ABOUTME: Cross-invocation state and step outputs.
// ABOUTME: Traits for both seams plus runner-backed and in-memory implementations.

mod file_commands;
mod saved;
mod store;

pub use file_commands::{FileCommands, format_record};
pub use saved::{SavedDeployment, StateKey, StateLookup};
pub use store::{MemoryStore, OutputSink, StateStore};
