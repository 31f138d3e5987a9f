// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the begin and finalize subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use deploy_tracker::config::StatusSource;
use deploy_tracker::output::OutputMode;

#[derive(Parser)]
#[command(name = "deploy-tracker")]
#[command(about = "Record a CI job as a GitHub deployment")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (also enabled by RUNNER_DEBUG=1)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How messages are printed
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Actions)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Workflow commands understood by the Actions runner
    Actions,
    /// Plain text
    Plain,
    /// JSON lines
    Json,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Actions => OutputMode::Actions,
            OutputFormat::Plain => OutputMode::Plain,
            OutputFormat::Json => OutputMode::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a deployment and mark it in progress (pre-step)
    Begin {
        /// API token (input: token)
        #[arg(long)]
        token: Option<String>,

        /// Git ref to deploy (input: ref)
        #[arg(long = "ref")]
        git_ref: Option<String>,

        /// Target environment (input: environment)
        #[arg(long)]
        environment: Option<String>,

        /// URL of the deployed environment (input: environment-url)
        #[arg(long)]
        environment_url: Option<String>,

        /// Fall back to GITHUB_TOKEN and the run's ref when inputs are missing
        #[arg(long)]
        ambient_fallback: bool,
    },

    /// Send the final status of the deployment begin created (post-step)
    Finalize {
        /// Where the job outcome comes from (input: status-source)
        #[arg(long)]
        status_source: Option<StatusSource>,

        /// Explicit job outcome: success, failure or cancelled (input: job-status)
        #[arg(long)]
        job_status: Option<String>,

        /// Update even if the deployment already has a final status
        #[arg(long)]
        allow_duplicate: bool,
    },
}
