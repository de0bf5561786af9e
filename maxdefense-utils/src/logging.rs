use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "MAXDEFENSE_LOG";

/// Installs a stderr subscriber filtered by `MAXDEFENSE_LOG`, defaulting to
/// `warn`. Stdout is left to the reports.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
