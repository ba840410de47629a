//! Navigation entry handed to the site renderer

use serde::Serialize;

use crate::config::GITHUB_WEB_BASE_URL;
use crate::version::label::VersionLabel;

/// Version item of the site navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavVersion {
    /// Display text
    pub text: VersionLabel,
    /// Link to the matching release page
    pub link: String,
    /// Whether the label is a semver pre-release
    pub prerelease: bool,
}

impl NavVersion {
    pub fn new(label: VersionLabel, repository: &str) -> Self {
        let link = release_link(&label, repository);
        let prerelease = label
            .semver()
            .is_some_and(|version| !version.pre.is_empty());

        Self {
            text: label,
            link,
            prerelease,
        }
    }
}

/// Link to the release page for `label`.
///
/// The sentinel links to whatever release is currently marked as latest.
pub fn release_link(label: &VersionLabel, repository: &str) -> String {
    if label.is_latest() {
        format!("{}/{}/releases/latest", GITHUB_WEB_BASE_URL, repository)
    } else {
        format!("{}/{}/releases/tag/{}", GITHUB_WEB_BASE_URL, repository, label)
    }
}
