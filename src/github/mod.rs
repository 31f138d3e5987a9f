// ABOUTME: GitHub REST API access for deployments and workflow runs.
// ABOUTME: Exposes the DeploymentApi trait and its reqwest implementation.

mod api;
mod client;
mod error;
mod types;

pub use api::DeploymentApi;
pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::{ApiError, ApiErrorKind};
pub use types::{
    DeploymentResponse, DeploymentStatusRecord, JobsPage, NewDeployment, NewDeploymentStatus,
    WorkflowJob, WorkflowRun,
};
