// ABOUTME: Deployment bookkeeping for the begin and finalize steps.
// ABOUTME: Exports the step entry points, status mapping, and outcome resolvers.

mod begin;
mod domain;
mod finalize;
mod outcome;
mod resolver;

pub use begin::{
    BeginReport, OUTPUT_DEPLOYMENT_ID, OUTPUT_DOMAIN, OUTPUT_ENVIRONMENT, OUTPUT_URL, begin,
};
pub use domain::domain_from_url;
pub use finalize::{FinalizeOutcome, finalize, update_deployment};
pub use outcome::{
    CANCELLED_DESCRIPTION, FAILURE_DESCRIPTION, FinalStatus, IN_PROGRESS_DESCRIPTION,
    SUCCESS_DESCRIPTION, determine_deployment_state,
};
pub use resolver::{ExplicitSignal, JobStatusResolver, RemoteQuery};
