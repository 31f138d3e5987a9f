// ABOUTME: Trait describing the GitHub operations used by begin and finalize.
// ABOUTME: Lets the step logic run against the real client or a test double.

use super::error::ApiError;
use super::types::{
    DeploymentResponse, DeploymentStatusRecord, NewDeployment, NewDeploymentStatus, WorkflowJob,
    WorkflowRun,
};
use crate::types::{DeploymentId, RunId};
use async_trait::async_trait;

/// Deployment and workflow-run operations scoped to one repository.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Create a deployment record.
    async fn create_deployment(
        &self,
        request: &NewDeployment,
    ) -> Result<DeploymentResponse, ApiError>;

    /// Append a status to an existing deployment.
    async fn create_deployment_status(
        &self,
        id: DeploymentId,
        status: &NewDeploymentStatus,
    ) -> Result<(), ApiError>;

    /// List every job of a workflow run, following pagination.
    async fn list_jobs_for_run(&self, run_id: RunId) -> Result<Vec<WorkflowJob>, ApiError>;

    /// Fetch a workflow run.
    async fn get_workflow_run(&self, run_id: RunId) -> Result<WorkflowRun, ApiError>;

    /// Most recent status of a deployment, if it has any.
    async fn latest_deployment_status(
        &self,
        id: DeploymentId,
    ) -> Result<Option<DeploymentStatusRecord>, ApiError>;
}
