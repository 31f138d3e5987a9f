// ABOUTME: Inputs for the begin step and the policy for resolving them.
// ABOUTME: Applies the production default and optional fallback to ambient CI variables.

use super::source::{ValueSource, first_of, parse_bool};
use crate::error::{Error, Result};

/// Environment name used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// How missing required inputs are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Missing `token` or `ref` is a configuration error.
    #[default]
    Strict,
    /// Fall back to `GITHUB_TOKEN` and `GITHUB_HEAD_REF`/`GITHUB_REF`.
    AmbientFallback,
}

/// Values given on the command line. Each one overrides the matching input.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub token: Option<String>,
    pub git_ref: Option<String>,
    pub environment: Option<String>,
    pub environment_url: Option<String>,
    pub ambient_fallback: bool,
}

impl InputOverrides {
    /// The effective policy: the flag, or the `ambient-fallback` input.
    pub fn policy(&self) -> Result<InputPolicy> {
        if self.ambient_fallback {
            return Ok(InputPolicy::AmbientFallback);
        }
        match ValueSource::Input("ambient-fallback").resolve() {
            None => Ok(InputPolicy::Strict),
            Some(raw) => match parse_bool(&raw) {
                Some(true) => Ok(InputPolicy::AmbientFallback),
                Some(false) => Ok(InputPolicy::Strict),
                None => Err(Error::invalid_value(
                    "ambient-fallback",
                    format!("expected true or false, got '{raw}'"),
                )),
            },
        }
    }
}

/// Resolved configuration for opening a deployment.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionInputs {
    pub token: String,
    pub git_ref: String,
    pub environment: String,
    pub environment_url: Option<String>,
}

impl std::fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInputs")
            .field("token", &"***")
            .field("git_ref", &self.git_ref)
            .field("environment", &self.environment)
            .field("environment_url", &self.environment_url)
            .finish()
    }
}

impl ActionInputs {
    /// Resolve inputs from overrides, `INPUT_*` variables and, under the
    /// fallback policy, the runner's own variables.
    pub fn resolve(overrides: &InputOverrides) -> Result<Self> {
        let policy = overrides.policy()?;

        let mut token_sources = vec![
            ValueSource::Flag(overrides.token.clone()),
            ValueSource::Input("token"),
        ];
        let mut ref_sources = vec![
            ValueSource::Flag(overrides.git_ref.clone()),
            ValueSource::Input("ref"),
        ];
        if policy == InputPolicy::AmbientFallback {
            token_sources.push(ValueSource::Env("GITHUB_TOKEN"));
            ref_sources.push(ValueSource::Env("GITHUB_HEAD_REF"));
            ref_sources.push(ValueSource::Env("GITHUB_REF"));
        }

        let token = first_of(&token_sources).ok_or(Error::MissingInput("token"))?;
        let git_ref = first_of(&ref_sources).ok_or(Error::MissingInput("ref"))?;

        let environment = first_of(&[
            ValueSource::Flag(overrides.environment.clone()),
            ValueSource::Input("environment"),
        ])
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let environment_url = first_of(&[
            ValueSource::Flag(overrides.environment_url.clone()),
            ValueSource::Input("environment-url"),
        ]);

        Ok(Self {
            token,
            git_ref,
            environment,
            environment_url,
        })
    }
}
