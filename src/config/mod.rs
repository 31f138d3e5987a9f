// ABOUTME: Configuration for the begin and finalize steps.
// ABOUTME: Resolves action inputs, finalize options, and the ambient run context.

mod context;
mod finalize;
mod inputs;
mod source;

pub use context::{DEFAULT_SERVER_URL, RunContext};
pub use finalize::{FinalizeOptions, FinalizeOverrides, StatusSource};
pub use inputs::{ActionInputs, DEFAULT_ENVIRONMENT, InputOverrides, InputPolicy};
pub use source::{ValueSource, first_of, input_var, parse_bool};
