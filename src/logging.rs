// Logging module - file-backed tracing so logs never garble the TUI
//
// Everything goes to a daily-rotated file under the configured log
// directory. Writing to stdout would break through the alternate screen
// buffer, so the subscriber never touches it.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The returned guard must be kept alive for
/// the process lifetime or buffered log lines are dropped on exit.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(log_dir: &Path, filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "termdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
