// ABOUTME: Post-step logic: send the final status of the deployment begin opened.
// ABOUTME: Best effort; every failure becomes a warning instead of an error.

use super::outcome::determine_deployment_state;
use super::resolver::{ExplicitSignal, JobStatusResolver, RemoteQuery};
use crate::config::{FinalizeOptions, RunContext};
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::github::{DeploymentApi, NewDeploymentStatus};
use crate::state::{SavedDeployment, StateLookup, StateStore};
use crate::types::{DeploymentId, DeploymentState, JobStatus};

/// What finalize ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// No saved deployment; begin never completed.
    NothingToUpdate,
    /// Saved state was unusable; see diagnostics.
    InvalidState,
    /// The deployment already had a final status, so none was added.
    AlreadyFinal {
        deployment_id: DeploymentId,
        state: DeploymentState,
    },
    /// A final status was sent.
    Updated {
        deployment_id: DeploymentId,
        job_status: JobStatus,
        state: DeploymentState,
    },
    /// Sending the status failed; see diagnostics.
    Failed,
}

/// Finalize the deployment recorded in `store`.
///
/// `connect` is only called once a saved deployment was found; it builds the
/// API client from the saved token and supplies the run context. Any error
/// from here on is recorded in `diag` and reported as
/// [`FinalizeOutcome::Failed`].
pub async fn finalize<A, F>(
    store: &impl StateStore,
    connect: F,
    options: &FinalizeOptions,
    diag: &mut Diagnostics,
) -> FinalizeOutcome
where
    A: DeploymentApi,
    F: FnOnce(&SavedDeployment) -> Result<(A, RunContext)>,
{
    let saved = match SavedDeployment::load(store) {
        StateLookup::Found(saved) => saved,
        StateLookup::Missing => {
            tracing::info!("No deployment to update");
            return FinalizeOutcome::NothingToUpdate;
        }
        StateLookup::Invalid(reason) => {
            diag.warn(Warning::invalid_state(reason));
            return FinalizeOutcome::InvalidState;
        }
    };

    let result = match connect(&saved) {
        Ok((api, ctx)) => update_deployment(&api, &ctx, &saved, options, diag).await,
        Err(e) => Err(e),
    };

    result.unwrap_or_else(|e| {
        diag.warn(Warning::status_update(e.to_string()));
        FinalizeOutcome::Failed
    })
}

/// Resolve the job outcome and append the matching terminal status.
pub async fn update_deployment(
    api: &impl DeploymentApi,
    ctx: &RunContext,
    saved: &SavedDeployment,
    options: &FinalizeOptions,
    diag: &mut Diagnostics,
) -> Result<FinalizeOutcome> {
    let deployment_id = saved.deployment_id;

    if options.guard_duplicates {
        match api.latest_deployment_status(deployment_id).await {
            Ok(Some(latest)) if !latest.state.is_open() => {
                tracing::info!(
                    "Deployment {deployment_id} already has final status {}, skipping",
                    latest.state
                );
                return Ok(FinalizeOutcome::AlreadyFinal {
                    deployment_id,
                    state: latest.state,
                });
            }
            Ok(_) => {}
            Err(e) => diag.warn(Warning::duplicate_guard(format!(
                "Could not read current status of deployment {deployment_id}: {e}"
            ))),
        }
    }

    let job_status = if options.uses_signal() {
        ExplicitSignal::new(options.job_status.clone())
            .resolve(diag)
            .await
    } else {
        RemoteQuery::new(api, ctx).resolve(diag).await
    };

    let final_status = determine_deployment_state(job_status);
    tracing::info!(
        "Updating deployment {deployment_id} status to {}",
        final_status.state
    );

    let environment_url = match final_status.state {
        DeploymentState::Success => saved.environment_url.clone(),
        _ => None,
    };
    let status = NewDeploymentStatus {
        state: final_status.state,
        environment: saved.environment.clone(),
        description: final_status.description.to_string(),
        log_url: saved.log_url.clone(),
        environment_url,
    };
    api.create_deployment_status(deployment_id, &status).await?;

    tracing::info!(
        "Deployment {deployment_id} status updated to {}",
        final_status.state
    );
    Ok(FinalizeOutcome::Updated {
        deployment_id,
        job_status,
        state: final_status.state,
    })
}
