//! Logging and tracing setup for the CLI.
//!
//! Diagnostics go to stderr by default so stdout stays clean for command
//! output (and `--json` piping). A log file can be requested via config
//! (`log_dir`) or environment (`HIVEMARK_LOG_PATH`, `HIVEMARK_LOG_DIR`);
//! file logging uses a non-blocking writer whose guard must be held for
//! the life of the process.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log output should go.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Explicit log file path; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for a daily-rotated `hivemark.log`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log targets from environment variables, falling back to the
    /// config file's `log_dir`.
    ///
    /// Precedence: `HIVEMARK_LOG_PATH` > `HIVEMARK_LOG_DIR` > config `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("HIVEMARK_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("HIVEMARK_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` always wins when set. Otherwise `--quiet` forces `error`,
/// `-v` raises to `debug` and `-vv` to `trace`, and the config level is
/// the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard when logging to a file; the caller keeps it
/// alive until exit so buffered log lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(ref path) = config.log_path {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "hivemark.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}
