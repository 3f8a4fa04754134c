//! logging
//!
//! Diagnostic logging through `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag
//! 2. `--debug` (same as `--log-level debug`)
//! 3. `LANEGRAPH_LOG` environment variable, as an `EnvFilter` directive
//!    (`debug`, `lanegraph::graph=trace`, ...)
//! 4. default to `warn`
//!
//! Events go to stderr so `log --json` output stays machine-readable.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Environment variable read when no level flag is given.
pub const LOG_ENV: &str = "LANEGRAPH_LOG";

/// Log levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Lowercase name, as accepted by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// Call once at startup; a second call returns an error.
pub fn init_logging(cli_level: Option<LogLevel>, debug: bool) -> Result<()> {
    let filter = build_filter(cli_level, debug, std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn build_filter(cli_level: Option<LogLevel>, debug: bool, env: Option<&str>) -> EnvFilter {
    let level = match (cli_level, debug) {
        (Some(level), _) => Some(level),
        (None, true) => Some(LogLevel::Debug),
        (None, false) => None,
    };

    if let Some(level) = level {
        return EnvFilter::new(level.as_str());
    }

    env.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
