// ABOUTME: Entry point for the deploy-tracker CLI application.
// ABOUTME: Parses arguments and dispatches to the begin and finalize handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use deploy_tracker::config::{FinalizeOverrides, InputOverrides};
use deploy_tracker::output::Output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let debug = cli.verbose || std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    // stdout carries workflow commands, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output.into());

    match cli.command {
        Commands::Begin {
            token,
            git_ref,
            environment,
            environment_url,
            ambient_fallback,
        } => {
            let overrides = InputOverrides {
                token,
                git_ref,
                environment,
                environment_url,
                ambient_fallback,
            };
            if let Err(e) = commands::begin(&overrides, &output).await {
                output.error(&format!("Action failed: {e}"));
                std::process::exit(1);
            }
        }
        Commands::Finalize {
            status_source,
            job_status,
            allow_duplicate,
        } => {
            let overrides = FinalizeOverrides {
                status_source,
                job_status,
                allow_duplicate,
            };
            commands::finalize(&overrides, &output).await;
        }
    }
}
