//! Wiring of the resolver for a site build

use std::sync::Arc;

use clap::ValueEnum;
use tracing::warn;

use crate::config::ResolverConfig;
use crate::nav::NavVersion;
use crate::version::label::VersionLabel;
use crate::version::manifest::FsManifestReader;
use crate::version::release::ReleaseSource;
use crate::version::resolver::VersionResolver;
use crate::version::sources::{GitHubReleaseSource, UnavailableReleaseSource};

/// What is printed for the site generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare label, e.g. `v1.5.0`
    #[default]
    Text,
    /// The navigation entry as JSON
    Json,
}

/// Builds a resolver backed by the GitHub Releases API and the local filesystem
pub fn build_resolver(config: &ResolverConfig) -> VersionResolver {
    let source: Arc<dyn ReleaseSource> =
        match GitHubReleaseSource::new(&config.api_base_url, &config.repository) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                warn!("Failed to create release client: {}", e);
                Arc::new(UnavailableReleaseSource::new(e.to_string()))
            }
        };

    VersionResolver::new(
        source,
        Arc::new(FsManifestReader),
        config.manifest_path.clone(),
    )
}

/// Renders the resolved label in the requested format
pub fn render(
    label: VersionLabel,
    repository: &str,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(label.to_string()),
        OutputFormat::Json => serde_json::to_string(&NavVersion::new(label, repository)),
    }
}
