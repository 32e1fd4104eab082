use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Rolling log file prefix, named after this package.
pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// Build the level filter for this crate's events. `verbose` adds the
/// per-key trace output of the tracker.
pub fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "trace" } else { "info" };
    EnvFilter::new(format!("{}={},warn", env!("CARGO_CRATE_NAME"), level))
}

/// Initialize the logging system with tracing.
///
/// If `log_dir` is provided, logs are also written to a daily-rolling
/// [`LOG_FILE`] in that directory.
/// Fails if a global subscriber is already installed.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The writer thread must outlive the subscriber, which lives for the
        // rest of the process.
        std::mem::forget(guard);

        registry
            .with(fmt::layer().with_target(true))
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    Ok(())
}
