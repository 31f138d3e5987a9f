// ABOUTME: Pre-step logic: open a deployment and mark it in progress.
// ABOUTME: Publishes step outputs and saves the state finalize reads later.

use super::domain::domain_from_url;
use super::outcome::IN_PROGRESS_DESCRIPTION;
use crate::config::{ActionInputs, RunContext};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::github::{DeploymentApi, NewDeployment, NewDeploymentStatus};
use crate::state::{OutputSink, SavedDeployment, StateStore};
use crate::types::{DeploymentId, DeploymentState};

/// Step output names.
pub const OUTPUT_DEPLOYMENT_ID: &str = "deployment-id";
pub const OUTPUT_ENVIRONMENT: &str = "environment";
pub const OUTPUT_URL: &str = "url";
pub const OUTPUT_DOMAIN: &str = "domain";

/// What begin created and published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginReport {
    pub deployment_id: DeploymentId,
    pub environment: String,
    pub environment_url: String,
    pub domain: String,
    pub log_url: String,
}

/// Create a deployment for `inputs`, mark it in progress, then publish
/// outputs and save state through `runner`.
///
/// Nothing is written to `runner` unless both API calls succeed, so a failed
/// begin leaves finalize with nothing to update.
pub async fn begin<S>(
    api: &impl DeploymentApi,
    ctx: &RunContext,
    inputs: &ActionInputs,
    runner: &mut S,
    diag: &mut Diagnostics,
) -> Result<BeginReport>
where
    S: StateStore + OutputSink,
{
    let request = NewDeployment::new(&inputs.git_ref, &inputs.environment);
    let response = api.create_deployment(&request).await?;

    let deployment_id = response
        .deployment_id()
        .ok_or_else(|| Error::MalformedResponse {
            message: response.message.clone(),
        })?;
    tracing::info!("Created deployment {deployment_id} for {}", inputs.environment);

    let log_url = ctx.log_url();
    let in_progress = NewDeploymentStatus {
        state: DeploymentState::InProgress,
        environment: inputs.environment.clone(),
        description: IN_PROGRESS_DESCRIPTION.to_string(),
        log_url: Some(log_url.clone()),
        environment_url: None,
    };
    api.create_deployment_status(deployment_id, &in_progress).await?;

    let environment_url = inputs.environment_url.clone().unwrap_or_default();
    let domain = if environment_url.is_empty() {
        String::new()
    } else {
        domain_from_url(&environment_url).unwrap_or_else(|e| {
            tracing::debug!("environment URL did not parse: {e}");
            diag.warn(Warning::domain_parse(&environment_url));
            String::new()
        })
    };

    let deployment_id_text = deployment_id.to_string();
    runner.set_output(OUTPUT_DEPLOYMENT_ID, &deployment_id_text)?;
    runner.set_output(OUTPUT_ENVIRONMENT, &inputs.environment)?;
    runner.set_output(OUTPUT_URL, &environment_url)?;
    runner.set_output(OUTPUT_DOMAIN, &domain)?;

    SavedDeployment {
        deployment_id,
        token: inputs.token.clone(),
        environment: inputs.environment.clone(),
        environment_url: inputs.environment_url.clone(),
        log_url: Some(log_url.clone()),
    }
    .save(runner)?;

    Ok(BeginReport {
        deployment_id,
        environment: inputs.environment.clone(),
        environment_url,
        domain,
        log_url,
    })
}
