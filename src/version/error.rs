use std::path::PathBuf;

use thiserror::Error;

/// Reason a resolution step was abandoned.
///
/// None of these reach the caller of `VersionResolver::resolve`; each one
/// moves resolution on to the next fallback step.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed release payload: {0}")]
    MalformedPayload(String),

    #[error("Manifest unavailable at {}: {source}", path.display())]
    ManifestUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No version declaration found in {}", path.display())]
    ManifestPatternMismatch { path: PathBuf },
}

/// Coarse failure category of a [`ResolveError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection error, timeout, or non-success status
    NetworkFailure,
    /// Body is not JSON, or `tag_name` is missing or invalid
    MalformedRemotePayload,
    /// Manifest missing or unreadable
    LocalArtifactUnavailable,
    /// Manifest readable but declares no version
    LocalPatternMismatch,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NetworkFailure => "network_failure",
            FailureKind::MalformedRemotePayload => "malformed_remote_payload",
            FailureKind::LocalArtifactUnavailable => "local_artifact_unavailable",
            FailureKind::LocalPatternMismatch => "local_pattern_mismatch",
        }
    }
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::Network(_)
            | ResolveError::ClientUnavailable(_)
            | ResolveError::Status(_) => FailureKind::NetworkFailure,
            ResolveError::MalformedPayload(_) => FailureKind::MalformedRemotePayload,
            ResolveError::ManifestUnavailable { .. } => FailureKind::LocalArtifactUnavailable,
            ResolveError::ManifestPatternMismatch { .. } => FailureKind::LocalPatternMismatch,
        }
    }
}
