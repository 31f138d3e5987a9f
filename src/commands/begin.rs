// ABOUTME: Begin command implementation.
// ABOUTME: Wires runner environment, API client and file commands into deploy::begin.

use deploy_tracker::config::{ActionInputs, InputOverrides, RunContext};
use deploy_tracker::deploy;
use deploy_tracker::diagnostics::Diagnostics;
use deploy_tracker::error::Result;
use deploy_tracker::github::GitHubClient;
use deploy_tracker::output::Output;
use deploy_tracker::state::FileCommands;

/// Open a deployment for the current run.
pub async fn begin(overrides: &InputOverrides, output: &Output) -> Result<()> {
    // Inputs first: a missing token must fail before any request is made.
    let inputs = ActionInputs::resolve(overrides)?;
    let ctx = RunContext::from_env()?;
    tracing::debug!(
        ?inputs,
        repository = %ctx.repository,
        run_id = %ctx.run_id,
        "resolved begin configuration"
    );

    let client = GitHubClient::new(&ctx.api_url, ctx.repository.clone(), &inputs.token)?;
    let mut runner = FileCommands::from_env();
    let mut diag = Diagnostics::default();

    let result = deploy::begin(&client, &ctx, &inputs, &mut runner, &mut diag).await;

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    let report = result?;
    output.info(&format!(
        "Deployment {} created for {}",
        report.deployment_id, report.environment
    ));
    Ok(())
}
