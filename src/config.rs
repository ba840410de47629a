use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Remote release source
// =============================================================================

/// Default base URL for the GitHub API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Repository whose latest release labels the documentation site
pub const DEFAULT_REPOSITORY: &str = "brenoepics/prometheus-mcp";

/// Media type requested from the releases endpoint
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Client identifier sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = "docs-version";

/// Timeout for the release fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Base URL for links shown to site readers
pub const GITHUB_WEB_BASE_URL: &str = "https://github.com";

// =============================================================================
// Local manifest fallback
// =============================================================================

/// Manifest read when the remote lookup fails, relative to the config file
pub const DEFAULT_MANIFEST_PATH: &str = "Cargo.toml";

/// Resolver configuration, usually loaded from a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// `owner/name` of the repository to query for releases
    pub repository: String,
    /// Base URL of the releases API
    pub api_base_url: String,
    /// Path of the manifest read by the fallback step
    pub manifest_path: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub repository: Option<String>,
    pub api_base_url: Option<String>,
    pub manifest_path: Option<PathBuf>,
}

impl ResolverConfig {
    /// Loads the configuration from a JSON file. Missing keys use defaults.
    ///
    /// A relative `manifestPath` (including the default) is resolved against
    /// the directory containing the config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;

        if config.manifest_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.manifest_path = dir.join(&config.manifest_path);
            }
        }

        Ok(config)
    }

    /// Loads `config_file` if given, then applies `overrides`.
    ///
    /// Without a config file the defaults are used and relative paths stay
    /// relative to the working directory.
    pub fn load(config_file: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(repository) = overrides.repository {
            self.repository = repository;
        }
        if let Some(api_base_url) = overrides.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(manifest_path) = overrides.manifest_path {
            self.manifest_path = manifest_path;
        }
        self
    }
}

/// Returns the path to the data directory for docs-version.
/// Uses $XDG_DATA_HOME/docs-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/docs-version,
/// or ./docs-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("docs-version.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("docs-version")
}
