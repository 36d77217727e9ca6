use anyhow::Context;
use newfile_domain::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_FILE_PREFIX: &str = "newfile.log";

/// Installs the global subscriber writing to a daily rolling file in the
/// configured log directory. Keep the returned guard alive until exit so that
/// buffered lines are flushed.
pub fn init_tracing(env: &Environment, verbose: bool) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&env.log_dir)
        .with_context(|| format!("Failed to create log directory {}", env.log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&env.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directives = filter_directives(
        std::env::var("RUST_LOG").ok(),
        env.log_filter.as_deref(),
        verbose,
    );
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// `--verbose` wins, then `RUST_LOG`, then `NEWFILE_LOG`, then `info`.
fn filter_directives(rust_log: Option<String>, configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| "info".to_string())
}
