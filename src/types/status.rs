// ABOUTME: Job outcome and deployment state enums.
// ABOUTME: Converts raw signal and conclusion strings into closed enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the CI job that performed the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Success,
    Failure,
    Cancelled,
}

impl JobStatus {
    /// Parse an explicit status signal (`job.status` in a workflow).
    ///
    /// Returns `None` for anything other than the three known values; callers
    /// decide how to treat the unknown value.
    pub fn from_signal(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Some(JobStatus::Success),
            "failure" => Some(JobStatus::Failure),
            "cancelled" => Some(JobStatus::Cancelled),
            _ => None,
        }
    }

    /// Map a GitHub job or run `conclusion`.
    ///
    /// `timed_out` counts as a failure. Other conclusions (`skipped`,
    /// `neutral`, `action_required`, ...) return `None`.
    pub fn from_conclusion(conclusion: &str) -> Option<Self> {
        match conclusion {
            "success" => Some(JobStatus::Success),
            "failure" | "timed_out" => Some(JobStatus::Failure),
            "cancelled" => Some(JobStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Success => "success",
            JobStatus::Failure => "failure",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a deployment status record, as GitHub names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    InProgress,
    Success,
    Failure,
    // Written by other tools; we only ever read these.
    Pending,
    Queued,
    Error,
    Inactive,
}

impl DeploymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::InProgress => "in_progress",
            DeploymentState::Success => "success",
            DeploymentState::Failure => "failure",
            DeploymentState::Pending => "pending",
            DeploymentState::Queued => "queued",
            DeploymentState::Error => "error",
            DeploymentState::Inactive => "inactive",
        }
    }

    /// Whether a deployment in this state still awaits its final status.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            DeploymentState::InProgress | DeploymentState::Pending | DeploymentState::Queued
        )
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_case_and_whitespace_tolerant() {
        assert_eq!(JobStatus::from_signal(" Success\n"), Some(JobStatus::Success));
        assert_eq!(JobStatus::from_signal("CANCELLED"), Some(JobStatus::Cancelled));
    }

    #[test]
    fn timed_out_conclusion_is_failure() {
        assert_eq!(JobStatus::from_conclusion("timed_out"), Some(JobStatus::Failure));
        assert_eq!(JobStatus::from_conclusion("skipped"), None);
    }

    #[test]
    fn deployment_state_serializes_snake_case() {
        let json = serde_json::to_string(&DeploymentState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn only_pending_states_are_open() {
        assert!(DeploymentState::InProgress.is_open());
        assert!(DeploymentState::Queued.is_open());
        assert!(!DeploymentState::Success.is_open());
        assert!(!DeploymentState::Failure.is_open());
        assert!(!DeploymentState::Inactive.is_open());
    }
}
