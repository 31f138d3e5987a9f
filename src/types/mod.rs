// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod repository;
mod status;

pub use id::{DeploymentId, Id, RunId};
pub use repository::{Repository, RepositoryError};
pub use status::{DeploymentState, JobStatus};
