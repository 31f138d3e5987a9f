// ABOUTME: Finalize command implementation.
// ABOUTME: Reads saved state and reports the job outcome; never fails the job.

use deploy_tracker::config::{FinalizeOptions, FinalizeOverrides, RunContext};
use deploy_tracker::deploy::{self, FinalizeOutcome};
use deploy_tracker::diagnostics::{Diagnostics, Warning};
use deploy_tracker::error::Result;
use deploy_tracker::github::GitHubClient;
use deploy_tracker::output::Output;
use deploy_tracker::state::{FileCommands, SavedDeployment};

/// Send the final deployment status. Problems are reported as warnings.
pub async fn finalize(overrides: &FinalizeOverrides, output: &Output) {
    let mut diag = Diagnostics::default();
    let store = FileCommands::from_env();

    let outcome = match FinalizeOptions::resolve(overrides) {
        Ok(options) => {
            let connect = |saved: &SavedDeployment| -> Result<(GitHubClient, RunContext)> {
                let ctx = RunContext::from_env()?;
                let client =
                    GitHubClient::new(&ctx.api_url, ctx.repository.clone(), &saved.token)?;
                Ok((client, ctx))
            };
            deploy::finalize(&store, connect, &options, &mut diag).await
        }
        Err(e) => {
            diag.warn(Warning::status_update(e.to_string()));
            FinalizeOutcome::Failed
        }
    };

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    match outcome {
        FinalizeOutcome::NothingToUpdate | FinalizeOutcome::InvalidState => {
            output.info("No deployment to update")
        }
        FinalizeOutcome::AlreadyFinal {
            deployment_id,
            state,
        } => output.info(&format!(
            "Deployment {deployment_id} already has final status {state}"
        )),
        FinalizeOutcome::Updated {
            deployment_id,
            state,
            ..
        } => output.info(&format!(
            "Deployment {deployment_id} status updated to {state}"
        )),
        FinalizeOutcome::Failed => {}
    }
}
