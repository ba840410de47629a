//! Release source implementations

pub mod github;

pub use github::GitHubReleaseSource;

use crate::version::error::ResolveError;
use crate::version::release::{ReleaseSource, RemoteReleaseInfo};

/// Stands in for a release source that could not be constructed.
///
/// Every fetch fails, so resolution continues with the manifest step.
pub struct UnavailableReleaseSource {
    reason: String,
}

impl UnavailableReleaseSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl ReleaseSource for UnavailableReleaseSource {
    async fn fetch_latest_release(&self) -> Result<RemoteReleaseInfo, ResolveError> {
        Err(ResolveError::ClientUnavailable(self.reason.clone()))
    }
}
