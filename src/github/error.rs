// ABOUTME: GitHub API error types with SNAFU pattern.
// ABOUTME: Separates transport, HTTP status, and decoding failures for programmatic handling.

use snafu::Snafu;

/// Errors returned by the GitHub REST client.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("invalid API base URL '{url}': {source}"))]
    BaseUrl { url: String, source: url::ParseError },

    #[snafu(display("token cannot be used as an HTTP header: {source}"))]
    InvalidToken {
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("failed to build HTTP client: {source}"))]
    Build { source: reqwest::Error },

    #[snafu(display("{endpoint} failed: {source}"))]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    #[snafu(display("{endpoint} returned HTTP {status}: {message}"))]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[snafu(display("failed to decode response from {endpoint}: {source}"))]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Client could not be configured.
    Setup,
    /// Network or TLS failure before a response arrived.
    Transport,
    /// GitHub answered with a non-success status code.
    Status,
    /// Response body did not match the expected shape.
    Decode,
}

impl ApiError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::BaseUrl { .. } | ApiError::InvalidToken { .. } | ApiError::Build { .. } => {
                ApiErrorKind::Setup
            }
            ApiError::Transport { .. } => ApiErrorKind::Transport,
            ApiError::Status { .. } => ApiErrorKind::Status,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }

    /// HTTP status code, if GitHub returned one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
