// ABOUTME: Strategies for learning how the deploying job ended.
// ABOUTME: Explicit signal or Actions API query, both behind JobStatusResolver.

use crate::config::RunContext;
use crate::diagnostics::{Diagnostics, Warning};
use crate::github::{ApiError, DeploymentApi};
use crate::types::{JobStatus, RunId};
use async_trait::async_trait;

/// Source of the job outcome used by finalize.
///
/// Resolution never fails: anything inconclusive becomes
/// [`JobStatus::Failure`] with a warning recorded in `diag`.
#[async_trait]
pub trait JobStatusResolver: Send + Sync {
    async fn resolve(&self, diag: &mut Diagnostics) -> JobStatus;
}

/// Outcome passed in directly, e.g. `${{ job.status }}`.
#[derive(Debug, Clone)]
pub struct ExplicitSignal {
    value: Option<String>,
}

impl ExplicitSignal {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }
}

#[async_trait]
impl JobStatusResolver for ExplicitSignal {
    async fn resolve(&self, diag: &mut Diagnostics) -> JobStatus {
        match self.value.as_deref() {
            Some(raw) => JobStatus::from_signal(raw).unwrap_or_else(|| {
                diag.warn(Warning::unknown_job_status(format!(
                    "Unknown job status: {raw}, assuming failure"
                )));
                JobStatus::Failure
            }),
            None => {
                diag.warn(Warning::unknown_job_status(
                    "No job status provided, assuming failure",
                ));
                JobStatus::Failure
            }
        }
    }
}

/// Outcome looked up through the Actions API.
///
/// Uses the first job of the run named like the current job that already has
/// a conclusion, then falls back to the run's own conclusion.
pub struct RemoteQuery<'a, A> {
    api: &'a A,
    run_id: RunId,
    job: &'a str,
}

impl<'a, A: DeploymentApi> RemoteQuery<'a, A> {
    pub fn new(api: &'a A, ctx: &'a RunContext) -> Self {
        Self {
            api,
            run_id: ctx.run_id,
            job: &ctx.job,
        }
    }

    async fn query(&self, diag: &mut Diagnostics) -> Result<JobStatus, ApiError> {
        let jobs = self.api.list_jobs_for_run(self.run_id).await?;
        let finished = jobs
            .iter()
            .find(|job| job.name == self.job && job.conclusion.is_some());

        if let Some(conclusion) = finished.and_then(|job| job.conclusion.as_deref()) {
            tracing::debug!(job = self.job, conclusion, "found completed job");
            return Ok(map_conclusion(conclusion, "job", diag));
        }

        diag.warn(Warning::status_query(
            "Could not find completed main job, checking workflow run status",
        ));

        let run = self.api.get_workflow_run(self.run_id).await?;
        match run.conclusion.as_deref() {
            Some(conclusion) => {
                tracing::info!("Workflow conclusion: {conclusion}");
                Ok(map_conclusion(conclusion, "workflow", diag))
            }
            None => {
                diag.warn(Warning::status_query(
                    "Workflow run has no conclusion yet, assuming failure",
                ));
                Ok(JobStatus::Failure)
            }
        }
    }
}

fn map_conclusion(conclusion: &str, subject: &str, diag: &mut Diagnostics) -> JobStatus {
    JobStatus::from_conclusion(conclusion).unwrap_or_else(|| {
        diag.warn(Warning::status_query(format!(
            "Unknown {subject} conclusion: {conclusion}, assuming failure"
        )));
        JobStatus::Failure
    })
}

#[async_trait]
impl<A: DeploymentApi> JobStatusResolver for RemoteQuery<'_, A> {
    async fn resolve(&self, diag: &mut Diagnostics) -> JobStatus {
        match self.query(diag).await {
            Ok(status) => status,
            Err(e) => {
                diag.warn(Warning::status_query(format!("Failed to get job status: {e}")));
                JobStatus::Failure
            }
        }
    }
}
