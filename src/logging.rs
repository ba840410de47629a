//! tracing subscriber setup
//!
//! stdout carries the resolved label, so logs go to a file in the data
//! directory.

use std::path::Path;

use clap::ValueEnum;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log record format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Builds a subscriber writing to `log_file` without installing it.
///
/// The returned guard flushes buffered records when dropped.
pub fn build(
    log_file: &Path,
    filter: &str,
    format: LogFormat,
) -> anyhow::Result<(Box<dyn Subscriber + Send + Sync>, WorkerGuard)> {
    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log path has no file name: {}", log_file.display()))?;

    let filter = EnvFilter::try_new(filter)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    };

    Ok((subscriber, guard))
}

/// Installs the global subscriber writing to `log_file`.
///
/// The returned guard must be held until the program exits.
pub fn init(log_file: &Path, filter: &str, format: LogFormat) -> anyhow::Result<WorkerGuard> {
    let (subscriber, guard) = build(log_file, filter, format)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}
