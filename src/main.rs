use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use docs_version::app::{self, OutputFormat};
use docs_version::config::{ConfigOverrides, ResolverConfig, log_path};
use docs_version::logging::{self, LogFormat};

#[derive(Parser)]
#[command(name = "docs-version")]
#[command(
    version,
    about = "Resolve the release version label for the documentation site navigation"
)]
struct Cli {
    /// JSON configuration file; a relative manifest path in it is resolved against its directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository queried for releases (owner/name)
    #[arg(long)]
    repository: Option<String>,

    /// Manifest read when the release lookup fails
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Base URL of the releases API
    #[arg(long)]
    api_base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter directive
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log record format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn resolver_config(&self) -> anyhow::Result<ResolverConfig> {
        ResolverConfig::load(
            self.config.as_deref(),
            ConfigOverrides {
                repository: self.repository.clone(),
                api_base_url: self.api_base_url.clone(),
                manifest_path: self.manifest.clone(),
            },
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolver_config()?;

    let log_file = cli.log_file.clone().unwrap_or_else(log_path);
    // A log setup failure never fails the build
    let _guard = logging::init(&log_file, &cli.log_level, cli.log_format)
        .inspect_err(|e| eprintln!("docs-version: logging disabled: {}", e))
        .ok();

    let label = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(app::build_resolver(&config).resolve());

    let output = app::render(label, &config.repository, cli.format)?;
    writeln!(std::io::stdout(), "{}", output)?;

    Ok(())
}
