// ABOUTME: Key/value seams between the two step invocations and the runner.
// ABOUTME: StateStore persists values for finalize; OutputSink publishes step outputs.

use crate::error::Result;
use std::collections::HashMap;

/// Values written by one step invocation and read by a later one in the same job.
pub trait StateStore {
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Option<String>;
}

/// Step outputs visible to later steps of the workflow.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// In-process store for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: HashMap<String, String>,
    outputs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with state, as finalize would see it.
    pub fn with_state<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            state: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            outputs: HashMap::new(),
        }
    }

    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    pub fn outputs(&self) -> &HashMap<String, String> {
        &self.outputs
    }

    pub fn state(&self) -> &HashMap<String, String> {
        &self.state
    }
}

impl StateStore for MemoryStore {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.state.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.state.get(key).cloned()
    }
}

impl OutputSink for MemoryStore {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
