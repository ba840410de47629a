//! Release source trait for fetching the most recent published release

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolveError;

/// Release metadata of interest to the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReleaseInfo {
    /// Tag of the release, with or without a leading `v`. Never empty.
    pub tag_name: String,
}

/// Trait for fetching release metadata from a remote source
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest published release
    ///
    /// Issues exactly one request and never retries.
    ///
    /// # Returns
    /// * `Ok(RemoteReleaseInfo)` - The release with a non-empty tag
    /// * `Err(ResolveError)` - Network, status, or payload failure
    async fn fetch_latest_release(&self) -> Result<RemoteReleaseInfo, ResolveError>;
}
