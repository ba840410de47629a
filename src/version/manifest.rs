//! Local manifest reading and version extraction
//!
//! The fallback step reads a manifest such as `Cargo.toml` and takes the
//! first `version = "<text>"` declaration found anywhere in the file.
//!
//! Format examples:
//! - `version = "1.5.0"`
//! - `version="1.5.0"`
//! - `version   =   "0.1.0-alpha"`

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use regex::Regex;

/// Trait for reading the manifest artifact
#[cfg_attr(test, automock)]
pub trait ManifestReader: Send + Sync {
    /// Reads the whole manifest as text
    fn read_manifest(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads manifests from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestReader;

impl ManifestReader for FsManifestReader {
    fn read_manifest(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Extracts the declared version from manifest text
pub struct ManifestParser {
    /// Regex for a version declaration: `version = "1.2.3"`
    version_re: Regex,
}

impl ManifestParser {
    pub fn new() -> Self {
        Self {
            // Match: version = "<non-empty text>"
            version_re: Regex::new(r#"version\s*=\s*"([^"]+)""#).unwrap(),
        }
    }

    /// Returns the value of the first version declaration, if any
    pub fn parse_version(&self, content: &str) -> Option<String> {
        self.version_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}
