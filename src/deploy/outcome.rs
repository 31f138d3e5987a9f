// ABOUTME: Maps a job outcome to the final deployment status.
// ABOUTME: Holds the fixed status descriptions shown on GitHub.

use crate::types::{DeploymentState, JobStatus};

pub const IN_PROGRESS_DESCRIPTION: &str = "Deployment in progress";
pub const SUCCESS_DESCRIPTION: &str = "Deployment completed successfully";
pub const FAILURE_DESCRIPTION: &str = "Deployment failed";
pub const CANCELLED_DESCRIPTION: &str = "Deployment cancelled";

/// Terminal state and description for a finished deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalStatus {
    pub state: DeploymentState,
    pub description: &'static str,
}

/// Cancelled jobs are reported as failed deployments; GitHub has no
/// cancelled deployment state.
pub fn determine_deployment_state(status: JobStatus) -> FinalStatus {
    match status {
        JobStatus::Success => FinalStatus {
            state: DeploymentState::Success,
            description: SUCCESS_DESCRIPTION,
        },
        JobStatus::Failure => FinalStatus {
            state: DeploymentState::Failure,
            description: FAILURE_DESCRIPTION,
        },
        JobStatus::Cancelled => FinalStatus {
            state: DeploymentState::Failure,
            description: CANCELLED_DESCRIPTION,
        },
    }
}
