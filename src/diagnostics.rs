// ABOUTME: Diagnostics accumulator for non-fatal warnings during a step.
// ABOUTME: Collects warnings that shouldn't fail the step but should be shown to users.

/// Collects non-fatal warnings during begin and finalize.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning. It is only logged at debug level; callers show
    /// collected warnings to the user through `Output`.
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if a warning of the given kind was collected.
    pub fn has(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// A non-fatal warning collected during a step.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The environment URL has no usable host.
    pub fn domain_parse(url: &str) -> Self {
        Self::new(
            WarningKind::DomainParse,
            format!("Failed to parse domain from URL: {url}"),
        )
    }

    /// An explicit job-status signal was missing or not recognised.
    pub fn unknown_job_status(message: impl Into<String>) -> Self {
        Self::new(WarningKind::UnknownJobStatus, message)
    }

    /// Querying the job or run outcome failed or found nothing.
    pub fn status_query(message: impl Into<String>) -> Self {
        Self::new(WarningKind::StatusQuery, message)
    }

    /// Saved state exists but cannot be used.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(WarningKind::InvalidState, message)
    }

    /// The duplicate-finalize check could not be performed.
    pub fn duplicate_guard(message: impl Into<String>) -> Self {
        Self::new(WarningKind::DuplicateGuard, message)
    }

    /// The final status could not be sent.
    pub fn status_update(message: impl Into<String>) -> Self {
        Self::new(
            WarningKind::StatusUpdate,
            format!("Failed to update deployment status: {}", message.into()),
        )
    }
}

/// Categories of warnings that can occur during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Environment URL could not be parsed; `domain` output left empty.
    DomainParse,
    /// Job-status signal missing or unrecognised; treated as failure.
    UnknownJobStatus,
    /// Job/run lookup failed or was inconclusive; treated as failure.
    StatusQuery,
    /// Saved state was unreadable; nothing was updated.
    InvalidState,
    /// Latest-status lookup failed; the update went ahead anyway.
    DuplicateGuard,
    /// Final status update failed.
    StatusUpdate,
}
