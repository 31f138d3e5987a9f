// ABOUTME: Options for the finalize step.
// ABOUTME: Chooses how the job outcome is sourced and whether duplicates are guarded.

use super::source::{ValueSource, first_of, parse_bool};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Where finalize learns the outcome of the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusSource {
    /// Use the explicit signal when one is given, otherwise query GitHub.
    #[default]
    Auto,
    /// Only the explicit `job-status` signal.
    Signal,
    /// Only the Actions API (job list, then workflow run).
    Query,
}

impl FromStr for StatusSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "auto" => Ok(StatusSource::Auto),
            "signal" => Ok(StatusSource::Signal),
            "query" => Ok(StatusSource::Query),
            other => Err(Error::invalid_value(
                "status-source",
                format!("expected auto, signal or query, got '{other}'"),
            )),
        }
    }
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusSource::Auto => "auto",
            StatusSource::Signal => "signal",
            StatusSource::Query => "query",
        })
    }
}

/// Values given on the command line for finalize.
#[derive(Debug, Clone, Default)]
pub struct FinalizeOverrides {
    pub status_source: Option<StatusSource>,
    pub job_status: Option<String>,
    pub allow_duplicate: bool,
}

/// Resolved finalize configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeOptions {
    pub status_source: StatusSource,
    /// Raw explicit signal, unvalidated.
    pub job_status: Option<String>,
    /// Skip the update when the deployment already has a final status.
    pub guard_duplicates: bool,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        Self {
            status_source: StatusSource::Auto,
            job_status: None,
            guard_duplicates: true,
        }
    }
}

impl FinalizeOptions {
    /// Resolve from overrides and the `status-source`, `job-status` and
    /// `allow-duplicate` inputs. `GITHUB_JOB_STATUS` is accepted as a signal.
    pub fn resolve(overrides: &FinalizeOverrides) -> Result<Self> {
        let status_source = match overrides.status_source {
            Some(source) => source,
            None => first_of(&[ValueSource::Input("status-source")])
                .map(|raw| raw.parse::<StatusSource>())
                .transpose()?
                .unwrap_or_default(),
        };

        let job_status = first_of(&[
            ValueSource::Flag(overrides.job_status.clone()),
            ValueSource::Input("job-status"),
            ValueSource::Env("GITHUB_JOB_STATUS"),
        ]);

        let allow_duplicate = overrides.allow_duplicate
            || first_of(&[ValueSource::Input("allow-duplicate")])
                .and_then(|raw| parse_bool(&raw))
                .unwrap_or(false);

        Ok(Self {
            status_source,
            job_status,
            guard_duplicates: !allow_duplicate,
        })
    }

    /// Whether the outcome will come from the explicit signal.
    pub fn uses_signal(&self) -> bool {
        match self.status_source {
            StatusSource::Signal => true,
            StatusSource::Query => false,
            StatusSource::Auto => self.job_status.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_sources() {
        assert_eq!("query".parse::<StatusSource>().unwrap(), StatusSource::Query);
        assert!("webhook".parse::<StatusSource>().is_err());
    }

    #[test]
    fn auto_prefers_signal_when_present() {
        let with_signal = FinalizeOptions {
            job_status: Some("success".to_string()),
            ..FinalizeOptions::default()
        };
        assert!(with_signal.uses_signal());
        assert!(!FinalizeOptions::default().uses_signal());
    }

    #[test]
    fn ambient_job_status_is_a_signal() {
        temp_env::with_vars(
            [
                ("INPUT_STATUS-SOURCE", None),
                ("INPUT_JOB-STATUS", None),
                ("INPUT_ALLOW-DUPLICATE", Some("true")),
                ("GITHUB_JOB_STATUS", Some("cancelled")),
            ],
            || {
                let options = FinalizeOptions::resolve(&FinalizeOverrides::default()).unwrap();
                assert_eq!(options.job_status.as_deref(), Some("cancelled"));
                assert!(options.uses_signal());
                assert!(!options.guard_duplicates);
            },
        );
    }
}
