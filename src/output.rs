// ABOUTME: Output formatting for step feedback.
// ABOUTME: Supports workflow-command annotations, plain text, and JSON output modes.

use serde::Serialize;

/// Output mode for step feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// GitHub Actions workflow commands (`::warning::`, `::error::`)
    #[default]
    Actions,
    /// Human-friendly text for local runs
    Plain,
    /// JSON lines for scripting
    Json,
}

/// Severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// Handles step output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print an informational line.
    pub fn info(&self, message: &str) {
        println!("{}", self.render(Level::Info, message));
    }

    /// Print a warning annotation.
    pub fn warning(&self, message: &str) {
        println!("{}", self.render(Level::Warning, message));
    }

    /// Print an error annotation.
    pub fn error(&self, message: &str) {
        let line = self.render(Level::Error, message);
        match self.mode {
            // The runner only parses workflow commands from stdout.
            OutputMode::Actions => println!("{line}"),
            OutputMode::Plain | OutputMode::Json => eprintln!("{line}"),
        }
    }

    /// Format a message for the current mode without printing it.
    pub fn render(&self, level: Level, message: &str) -> String {
        match self.mode {
            OutputMode::Actions => match level {
                Level::Info => message.to_string(),
                Level::Warning | Level::Error => {
                    format!("::{}::{}", level.as_str(), escape_data(message))
                }
            },
            OutputMode::Plain => match level {
                Level::Info => message.to_string(),
                Level::Warning | Level::Error => format!("{}: {message}", level.as_str()),
            },
            OutputMode::Json => {
                let event = JsonEvent {
                    event: level.as_str(),
                    message,
                };
                serde_json::to_string(&event).unwrap_or_else(|_| message.to_string())
            }
        }
    }
}

/// Escape the message part of a workflow command.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value of a workflow command.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
}
