// ABOUTME: In-memory DeploymentApi that records calls and returns scripted answers.
// ABOUTME: Used to test begin and finalize without a network.

use async_trait::async_trait;
use deploy_tracker::github::{
    ApiError, DeploymentApi, DeploymentResponse, DeploymentStatusRecord, NewDeployment,
    NewDeploymentStatus, WorkflowJob, WorkflowRun,
};
use deploy_tracker::types::{DeploymentId, DeploymentState, RunId};
use parking_lot::Mutex;
use std::sync::Arc;

/// One call made against the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDeployment(NewDeployment),
    CreateStatus(DeploymentId, NewDeploymentStatus),
    ListJobs(RunId),
    GetRun(RunId),
    LatestStatus(DeploymentId),
}

/// Scripted GitHub double. Clones share one call log.
#[derive(Clone)]
pub struct RecordingApi {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub deployment: serde_json::Value,
    pub fail_status_updates: bool,
    pub jobs: Vec<WorkflowJob>,
    pub jobs_fail: bool,
    pub run_conclusion: Option<String>,
    pub latest_state: Option<DeploymentState>,
    pub latest_fails: bool,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            deployment: serde_json::json!({ "id": 12345 }),
            fail_status_updates: false,
            jobs: Vec::new(),
            jobs_fail: false,
            run_conclusion: None,
            latest_state: None,
            latest_fails: false,
        }
    }
}

pub fn job(name: &str, conclusion: Option<&str>) -> WorkflowJob {
    WorkflowJob {
        name: name.to_string(),
        status: Some(
            if conclusion.is_some() {
                "completed"
            } else {
                "in_progress"
            }
            .to_string(),
        ),
        conclusion: conclusion.map(str::to_string),
    }
}

fn server_error(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status: 500,
        message: "Server Error".to_string(),
    }
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn status_updates(&self) -> Vec<NewDeploymentStatus> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateStatus(_, status) => Some(status),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl DeploymentApi for RecordingApi {
    async fn create_deployment(
        &self,
        request: &NewDeployment,
    ) -> Result<DeploymentResponse, ApiError> {
        self.record(Call::CreateDeployment(request.clone()));
        Ok(serde_json::from_value(self.deployment.clone()).unwrap())
    }

    async fn create_deployment_status(
        &self,
        id: DeploymentId,
        status: &NewDeploymentStatus,
    ) -> Result<(), ApiError> {
        self.record(Call::CreateStatus(id, status.clone()));
        if self.fail_status_updates {
            return Err(server_error("POST statuses"));
        }
        Ok(())
    }

    async fn list_jobs_for_run(&self, run_id: RunId) -> Result<Vec<WorkflowJob>, ApiError> {
        self.record(Call::ListJobs(run_id));
        if self.jobs_fail {
            return Err(server_error("GET jobs"));
        }
        Ok(self.jobs.clone())
    }

    async fn get_workflow_run(&self, run_id: RunId) -> Result<WorkflowRun, ApiError> {
        self.record(Call::GetRun(run_id));
        Ok(WorkflowRun {
            id: run_id,
            status: Some("in_progress".to_string()),
            conclusion: self.run_conclusion.clone(),
        })
    }

    async fn latest_deployment_status(
        &self,
        id: DeploymentId,
    ) -> Result<Option<DeploymentStatusRecord>, ApiError> {
        self.record(Call::LatestStatus(id));
        if self.latest_fails {
            return Err(server_error("GET statuses"));
        }
        Ok(self
            .latest_state
            .map(|state| DeploymentStatusRecord { state }))
    }
}
