//! File logging for the CLI.
//!
//! Ramp output and the run log own stdout and stderr, so tracing events go
//! to a file only. The level comes from `--log-level`, unless `OKRAMP_LOG`
//! is set, in which case that directive string wins.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_FILE: &str = "okramp.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "OKRAMP_LOG";

/// Filter for this crate's events at `level`.
///
/// An unparseable level falls back to [`DEFAULT_LOG_LEVEL`].
fn crate_filter(level: &str) -> EnvFilter {
    let target = env!("CARGO_CRATE_NAME");
    EnvFilter::try_new(format!("{target}={level}"))
        .unwrap_or_else(|_| EnvFilter::new(format!("{target}={DEFAULT_LOG_LEVEL}")))
}

/// Start the file logger. Hold the returned guard until exit so buffered
/// events are flushed.
pub fn init_logging(log_path: Option<&Path>, level: &str) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| crate_filter(level));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // Step spans are only instrumented in debug builds
    #[cfg(debug_assertions)]
    let layer = layer.with_span_events(fmt::format::FmtSpan::CLOSE);

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}
