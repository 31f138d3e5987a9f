// ABOUTME: reqwest-based GitHub REST client for one repository.
// ABOUTME: Handles auth headers, path encoding, pagination, and error decoding.

use super::api::DeploymentApi;
use super::error::{
    ApiError, BaseUrlSnafu, BuildSnafu, DecodeSnafu, InvalidTokenSnafu, StatusSnafu,
    TransportSnafu,
};
use super::types::{
    DeploymentResponse, DeploymentStatusRecord, JobsPage, NewDeployment, NewDeploymentStatus,
    WorkflowJob, WorkflowRun,
};
use crate::types::{DeploymentId, Repository, RunId};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use snafu::ResultExt;
use std::time::Duration;
use url::Url;

/// Default public API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const JOBS_PER_PAGE: usize = 100;

/// GitHub REST client bound to a single repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    repository: Repository,
}

impl GitHubClient {
    /// Build a client for `repository` authenticated with `token`.
    ///
    /// `api_url` is normally `GITHUB_API_URL`, which points at the GHES API on
    /// self-hosted installations.
    pub fn new(api_url: &str, repository: Repository, token: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(api_url).context(BaseUrlSnafu { url: api_url })?;

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .context(InvalidTokenSnafu)?;
        auth.set_sensitive(true);

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::AUTHORIZATION, auth);
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
        default_headers.insert(
            header::HeaderName::from_static("x-github-api-version"),
            header::HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .default_headers(default_headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(BuildSnafu)?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            repository,
        })
    }

    /// Absolute URL for a path below `/repos/{owner}/{repo}`.
    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url,
            urlencoding::encode(self.repository.owner()),
            urlencoding::encode(self.repository.name()),
            tail
        )
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(%endpoint, "sending GitHub API request");

        let response = request.send().await.context(TransportSnafu { endpoint })?;
        let status = response.status();
        let body = response.text().await.context(TransportSnafu { endpoint })?;

        if !status.is_success() {
            return StatusSnafu {
                endpoint,
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            }
            .fail();
        }

        serde_json::from_str(&body).context(DecodeSnafu { endpoint })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull GitHub's `message` field out of an error body, falling back to the raw text.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("no response body").to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl DeploymentApi for GitHubClient {
    async fn create_deployment(
        &self,
        request: &NewDeployment,
    ) -> Result<DeploymentResponse, ApiError> {
        let url = self.repo_url("/deployments");
        let endpoint = format!("POST {url}");
        self.send(self.http.post(&url).json(request), &endpoint).await
    }

    async fn create_deployment_status(
        &self,
        id: DeploymentId,
        status: &NewDeploymentStatus,
    ) -> Result<(), ApiError> {
        let url = self.repo_url(&format!("/deployments/{id}/statuses"));
        let endpoint = format!("POST {url}");
        self.send::<IgnoredAny>(self.http.post(&url).json(status), &endpoint).await?;
        Ok(())
    }

    async fn list_jobs_for_run(&self, run_id: RunId) -> Result<Vec<WorkflowJob>, ApiError> {
        let url = self.repo_url(&format!("/actions/runs/{run_id}/jobs"));
        let endpoint = format!("GET {url}");
        let per_page = JOBS_PER_PAGE.to_string();

        let mut jobs = Vec::new();
        let mut page = 1u32;
        loop {
            let page_param = page.to_string();
            let request = self.http.get(&url).query(&[
                ("filter", "latest"),
                ("per_page", per_page.as_str()),
                ("page", page_param.as_str()),
            ]);
            let batch: JobsPage = self.send(request, &endpoint).await?;

            let fetched = batch.jobs.len();
            jobs.extend(batch.jobs);

            if fetched < JOBS_PER_PAGE || jobs.len() as u64 >= batch.total_count {
                break;
            }
            page += 1;
        }

        Ok(jobs)
    }

    async fn get_workflow_run(&self, run_id: RunId) -> Result<WorkflowRun, ApiError> {
        let url = self.repo_url(&format!("/actions/runs/{run_id}"));
        let endpoint = format!("GET {url}");
        self.send(self.http.get(&url), &endpoint).await
    }

    async fn latest_deployment_status(
        &self,
        id: DeploymentId,
    ) -> Result<Option<DeploymentStatusRecord>, ApiError> {
        let url = self.repo_url(&format!("/deployments/{id}/statuses"));
        let endpoint = format!("GET {url}");
        // GitHub lists statuses newest first.
        let statuses: Vec<DeploymentStatusRecord> = self
            .send(self.http.get(&url).query(&[("per_page", "1")]), &endpoint)
            .await?;
        Ok(statuses.into_iter().next())
    }
}
