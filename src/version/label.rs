//! Display-ready version label
//!
//! A label is either the sentinel `"latest"` or `v` followed by non-empty
//! version text. The constructors are the only way to build one, so the
//! invariant holds for every value in circulation.

use std::fmt;

use semver::Version;
use serde::Serialize;

/// Label used when no version could be determined
pub const LATEST: &str = "latest";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// The sentinel label
    pub fn latest() -> Self {
        Self(LATEST.to_string())
    }

    /// Builds a label from a release tag.
    ///
    /// Tags that already start with `v` are kept as-is; others get a `v` prefix.
    /// Returns `None` for an empty tag.
    pub fn from_release_tag(tag: &str) -> Option<Self> {
        if tag.is_empty() {
            return None;
        }
        if tag.starts_with('v') {
            Some(Self(tag.to_string()))
        } else {
            Some(Self(format!("v{}", tag)))
        }
    }

    /// Builds a label from a manifest version.
    ///
    /// Manifests never carry a `v` prefix, so one is always prepended.
    /// Returns `None` for an empty version.
    pub fn from_manifest_version(version: &str) -> Option<Self> {
        if version.is_empty() {
            return None;
        }
        Some(Self(format!("v{}", version)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_latest(&self) -> bool {
        self.0 == LATEST
    }

    /// Parses the text after the `v` prefix as a semantic version.
    ///
    /// Partial versions are padded with zeros ("1.2" -> 1.2.0).
    /// Returns `None` for the sentinel or text that is not semver.
    pub fn semver(&self) -> Option<Version> {
        if self.is_latest() {
            return None;
        }
        let text = self.0.strip_prefix('v')?;
        let parts: Vec<&str> = text.split('.').collect();
        let normalized = match parts.len() {
            1 => format!("{}.0.0", parts[0]),
            2 => format!("{}.{}.0", parts[0], parts[1]),
            _ => text.to_string(),
        };
        Version::parse(&normalized).ok()
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
