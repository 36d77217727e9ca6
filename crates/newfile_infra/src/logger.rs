use newfile_app::LogInfra;

/// Forwards picker diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl LogInfra for TracingLogger {
    fn log(&self, message: &str, detail: &str) {
        if detail.is_empty() {
            tracing::info!("{message}");
        } else {
            tracing::info!(detail, "{message}");
        }
    }
}
