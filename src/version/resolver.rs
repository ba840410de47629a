//! Version label resolution with ordered fallback
//!
//! Resolution tries, in order:
//! 1. the latest remote release (tag kept as-is when it already starts with `v`)
//! 2. the version declared in the local manifest (always prefixed with `v`)
//! 3. the sentinel `"latest"`
//!
//! Each step runs at most once per call and the local manifest is only read
//! after the remote step has failed.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::version::error::ResolveError;
use crate::version::label::VersionLabel;
use crate::version::manifest::{ManifestParser, ManifestReader};
use crate::version::release::ReleaseSource;

/// Step that produced the final label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    Remote,
    Manifest,
    Sentinel,
}

impl LabelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSource::Remote => "remote",
            LabelSource::Manifest => "manifest",
            LabelSource::Sentinel => "sentinel",
        }
    }
}

/// Outcome of a resolution, including why earlier steps were abandoned
#[derive(Debug)]
pub struct Resolution {
    pub label: VersionLabel,
    pub source: LabelSource,
    /// Failures of the abandoned steps, in the order they were attempted
    pub failures: Vec<ResolveError>,
}

/// Determines the version label shown in the site navigation
pub struct VersionResolver {
    release_source: Arc<dyn ReleaseSource>,
    manifest_reader: Arc<dyn ManifestReader>,
    manifest_path: PathBuf,
    parser: ManifestParser,
}

impl VersionResolver {
    pub fn new(
        release_source: Arc<dyn ReleaseSource>,
        manifest_reader: Arc<dyn ManifestReader>,
        manifest_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            release_source,
            manifest_reader,
            manifest_path: manifest_path.into(),
            parser: ManifestParser::new(),
        }
    }

    /// Resolves the version label. Never fails; the worst case is `"latest"`.
    pub async fn resolve(&self) -> VersionLabel {
        self.resolve_detailed().await.label
    }

    /// Resolves the version label and reports which step produced it
    pub async fn resolve_detailed(&self) -> Resolution {
        let mut failures = Vec::new();

        match self.resolve_remote().await {
            Ok(label) => return self.finish(label, LabelSource::Remote, failures),
            Err(e) => {
                warn!(kind = e.kind().as_str(), "Remote version lookup failed: {}", e);
                failures.push(e);
            }
        }

        match self.resolve_local() {
            Ok(label) => return self.finish(label, LabelSource::Manifest, failures),
            Err(e) => {
                warn!(kind = e.kind().as_str(), "Manifest version lookup failed: {}", e);
                failures.push(e);
            }
        }

        self.finish(VersionLabel::latest(), LabelSource::Sentinel, failures)
    }

    /// Remote step: label from the latest published release
    pub async fn resolve_remote(&self) -> Result<VersionLabel, ResolveError> {
        let release = self.release_source.fetch_latest_release().await?;
        debug!("Latest release tag: {}", release.tag_name);

        VersionLabel::from_release_tag(&release.tag_name)
            .ok_or_else(|| ResolveError::MalformedPayload("tag_name is empty".to_string()))
    }

    /// Local step: label from the first version declaration in the manifest
    pub fn resolve_local(&self) -> Result<VersionLabel, ResolveError> {
        let content = self
            .manifest_reader
            .read_manifest(&self.manifest_path)
            .map_err(|source| ResolveError::ManifestUnavailable {
                path: self.manifest_path.clone(),
                source,
            })?;

        self.parser
            .parse_version(&content)
            .and_then(|version| VersionLabel::from_manifest_version(&version))
            .ok_or_else(|| ResolveError::ManifestPatternMismatch {
                path: self.manifest_path.clone(),
            })
    }

    fn finish(
        &self,
        label: VersionLabel,
        source: LabelSource,
        failures: Vec<ResolveError>,
    ) -> Resolution {
        info!(
            source = source.as_str(),
            semver = label.semver().is_some(),
            "Resolved version label: {}",
            label
        );
        Resolution {
            label,
            source,
            failures,
        }
    }
}
