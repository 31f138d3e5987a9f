// ABOUTME: Request and response bodies for the GitHub deployment and Actions APIs.
// ABOUTME: Only the fields this tool reads or writes are modeled.

use crate::config::DEFAULT_ENVIRONMENT;
use crate::types::{DeploymentId, DeploymentState, RunId};
use serde::{Deserialize, Serialize};

/// Body of `POST /repos/{owner}/{repo}/deployments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeployment {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub environment: String,
    pub auto_merge: bool,
    pub required_contexts: Vec<String>,
    pub production_environment: bool,
    pub transient_environment: bool,
}

impl NewDeployment {
    /// A deployment of `git_ref` to `environment` that skips auto-merge and
    /// commit status checks. Only the default environment is flagged as a
    /// production environment.
    pub fn new(git_ref: impl Into<String>, environment: impl Into<String>) -> Self {
        let environment = environment.into();
        Self {
            git_ref: git_ref.into(),
            production_environment: environment == DEFAULT_ENVIRONMENT,
            environment,
            auto_merge: false,
            required_contexts: Vec::new(),
            transient_environment: false,
        }
    }
}

/// Response of the create-deployment call.
///
/// GitHub answers `202 Accepted` with only a `message` when it merged the
/// default branch instead of creating a deployment, so `id` is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentResponse {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeploymentResponse {
    /// The numeric deployment id, if the response carried one.
    pub fn deployment_id(&self) -> Option<DeploymentId> {
        self.id
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .map(DeploymentId::new)
    }
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDeploymentStatus {
    pub state: DeploymentState,
    pub environment: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
}

/// One job of a workflow run.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowJob {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
}

/// One page of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub jobs: Vec<WorkflowJob>,
}

/// A workflow run, as returned by `GET /repos/{owner}/{repo}/actions/runs/{run_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub id: RunId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
}

/// An existing deployment status record. Only the state is read.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentStatusRecord {
    pub state: DeploymentState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_default_environment_is_production() {
        assert!(NewDeployment::new("main", DEFAULT_ENVIRONMENT).production_environment);
        assert!(!NewDeployment::new("main", "staging").production_environment);
    }

    #[test]
    fn status_record_needs_only_state() {
        let record: DeploymentStatusRecord = serde_json::from_str(r#"{"state":"failure"}"#).unwrap();
        assert_eq!(record.state, DeploymentState::Failure);

        let record: DeploymentStatusRecord =
            serde_json::from_str(r#"{"id":3,"state":"queued","description":null}"#).unwrap();
        assert_eq!(record.state, DeploymentState::Queued);
    }
}
