//! Logging setup for the ddlcanon CLI
//!
//! Console output plus a per-run timestamped log file, matching what the
//! schema-diff pipeline expects: INFO and above on standard output,
//! DEBUG and above in the file. Failure-severity lines are emitted
//! through the [`fail!`](crate::fail) macro with the `fail` target so
//! they stand out in both sinks.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory where the per-run log file is written
    pub log_dir: PathBuf,

    /// Whether to log to standard output
    pub enable_console_logs: bool,

    /// Whether to write the per-run log file
    pub enable_file_log: bool,

    /// Default console filter; RUST_LOG takes precedence
    pub console_filter: String,

    /// Filter for the log file
    pub file_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            enable_console_logs: true,
            enable_file_log: true,
            console_filter: "info".to_string(),
            file_filter: "debug".to_string(),
        }
    }
}

/// Initialize the logging system with the given configuration.
///
/// Returns the file writer's guard when a file layer is active; the
/// caller must keep it alive until logging is finished so buffered
/// lines are flushed before the process exits.
///
/// # Panics
/// Panics if logging has already been initialized
pub fn init(config: LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    // With both sinks disabled there is nothing to install.
    if !config.enable_console_logs && !config.enable_file_log {
        return Ok(None);
    }

    let mut layers = Vec::new();
    let mut guard = None;

    if config.enable_console_logs {
        // RUST_LOG takes precedence over the configured default.
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.console_filter));

        let console_layer = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stdout)
            .with_filter(env_filter)
            .boxed();

        layers.push(console_layer);
    }

    if config.enable_file_log {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_name = format!(
            "ddlcanon-{}.log",
            chrono::Local::now().format("%Y-%m-%d-%H%M-%S")
        );
        let file_appender = tracing_appender::rolling::never(&config.log_dir, file_name);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(EnvFilter::new(&config.file_filter))
            .boxed();

        layers.push(file_layer);
    }

    tracing_subscriber::registry().with(layers).init();

    Ok(guard)
}

/// Failure-severity log line.
///
/// The CI report treats FAIL as its own severity above ERROR;
/// `tracing` has no custom levels, so FAIL maps to an ERROR event
/// with the `fail` target.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        tracing::error!(target: "fail", $($arg)*)
    };
}
