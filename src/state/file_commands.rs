// ABOUTME: GitHub Actions runner adapter for step state and outputs.
// ABOUTME: Appends heredoc records to GITHUB_STATE/GITHUB_OUTPUT and reads STATE_* variables.

use super::store::{OutputSink, StateStore};
use crate::error::{Error, Result};
use crate::output::{escape_data, escape_property};
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runner-backed implementation of [`StateStore`] and [`OutputSink`].
///
/// Writes go to the files named by `GITHUB_STATE` and `GITHUB_OUTPUT`. When a
/// file variable is absent (older runners), the legacy `::save-state` and
/// `::set-output` workflow commands are printed to stdout instead.
#[derive(Debug, Clone, Default)]
pub struct FileCommands {
    state_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl FileCommands {
    pub fn new(state_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self {
            state_file,
            output_file,
        }
    }

    /// Use the file paths the runner exports for the current step.
    pub fn from_env() -> Self {
        let path = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::new(path("GITHUB_STATE"), path("GITHUB_OUTPUT"))
    }

    fn issue(command: &'static str, file: Option<&Path>, name: &str, value: &str) -> Result<()> {
        match file {
            Some(path) => append_record(command, path, name, value),
            None => {
                println!(
                    "::{command} name={}::{}",
                    escape_property(name),
                    escape_data(value)
                );
                Ok(())
            }
        }
    }
}

impl StateStore for FileCommands {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::issue("save-state", self.state_file.as_deref(), key, value)
    }

    /// The runner exposes saved state to the post step as `STATE_<key>`.
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(format!("STATE_{key}")).ok()
    }
}

impl OutputSink for FileCommands {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        Self::issue("set-output", self.output_file.as_deref(), name, value)
    }
}

/// Format one `name<<DELIMITER` record as the runner expects it.
pub fn format_record(
    command: &'static str,
    name: &str,
    value: &str,
    delimiter: &str,
) -> Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(Error::FileCommand {
            command,
            name: name.to_string(),
            reason: format!("value contains the delimiter {delimiter}"),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn append_record(command: &'static str, path: &Path, name: &str, value: &str) -> Result<()> {
    let record = format_record(command, name, value, &delimiter())?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::FileCommand {
            command,
            name: name.to_string(),
            reason: format!("cannot open {}: {e}", path.display()),
        })?;
    file.write_all(record.as_bytes())?;
    Ok(())
}

/// Delimiter unlikely to appear in any value.
fn delimiter() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("ghadelimiter_{nanos:x}{:x}", std::process::id())
}
