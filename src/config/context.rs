// ABOUTME: Read-only description of the CI run both steps execute in.
// ABOUTME: Built once from the runner's GITHUB_* variables and passed explicitly.

use super::source::{ValueSource, first_of};
use crate::error::{Error, Result};
use crate::github::DEFAULT_API_URL;
use crate::types::{Repository, RunId};

/// Web UI root used when the runner does not report one.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// The CI run this process belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub repository: Repository,
    pub run_id: RunId,
    /// Job id of the current job (`GITHUB_JOB`), empty when unknown.
    pub job: String,
    pub server_url: String,
    pub api_url: String,
}

impl RunContext {
    /// Build the context from `GITHUB_REPOSITORY`, `GITHUB_RUN_ID`,
    /// `GITHUB_JOB`, `GITHUB_SERVER_URL` and `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self> {
        let repository = first_of(&[ValueSource::Env("GITHUB_REPOSITORY")])
            .ok_or(Error::MissingEnvVar("GITHUB_REPOSITORY"))?;
        let repository = Repository::parse(&repository)
            .map_err(|e| Error::invalid_value("GITHUB_REPOSITORY", e.to_string()))?;

        let run_id = first_of(&[ValueSource::Env("GITHUB_RUN_ID")])
            .ok_or(Error::MissingEnvVar("GITHUB_RUN_ID"))?;
        let run_id = run_id
            .parse::<RunId>()
            .map_err(|e| Error::invalid_value("GITHUB_RUN_ID", format!("'{run_id}': {e}")))?;

        Ok(Self {
            repository,
            run_id,
            job: first_of(&[ValueSource::Env("GITHUB_JOB")]).unwrap_or_default(),
            server_url: first_of(&[ValueSource::Env("GITHUB_SERVER_URL")])
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            api_url: first_of(&[ValueSource::Env("GITHUB_API_URL")])
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// Link to the logs of the current run.
    pub fn log_url(&self) -> String {
        format!(
            "{}/{}/{}/actions/runs/{}",
            self.server_url.trim_end_matches('/'),
            self.repository.owner(),
            self.repository.name(),
            self.run_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vars = [(&'static str, Option<&'static str>); 5];

    fn ambient(repo: Option<&'static str>, run_id: Option<&'static str>) -> Vars {
        [
            ("GITHUB_REPOSITORY", repo),
            ("GITHUB_RUN_ID", run_id),
            ("GITHUB_JOB", Some("deploy")),
            ("GITHUB_SERVER_URL", None),
            ("GITHUB_API_URL", None),
        ]
    }

    #[test]
    fn log_url_points_at_run() {
        temp_env::with_vars(ambient(Some("octo-org/hello"), Some("4242")), || {
            let ctx = RunContext::from_env().unwrap();
            assert_eq!(
                ctx.log_url(),
                "https://github.com/octo-org/hello/actions/runs/4242"
            );
            assert_eq!(ctx.api_url, DEFAULT_API_URL);
            assert_eq!(ctx.job, "deploy");
        });
    }

    #[test]
    fn missing_repository_is_reported() {
        temp_env::with_vars(ambient(None, Some("1")), || {
            let err = RunContext::from_env().unwrap_err();
            assert!(matches!(err, Error::MissingEnvVar("GITHUB_REPOSITORY")));
        });
    }

    #[test]
    fn non_numeric_run_id_is_rejected() {
        temp_env::with_vars(ambient(Some("octo-org/hello"), Some("abc")), || {
            let err = RunContext::from_env().unwrap_err();
            assert!(err.to_string().contains("GITHUB_RUN_ID"));
        });
    }
}
