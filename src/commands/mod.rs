// ABOUTME: Command module aggregator for the deploy-tracker CLI.
// ABOUTME: Re-exports the begin and finalize command handlers.

mod begin;
mod finalize;

pub use begin::begin;
pub use finalize::finalize;
