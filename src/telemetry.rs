use tracing_subscriber::EnvFilter;

/// Installs the global subscriber once; later calls are ignored.
///
/// Logs go to stderr so stdout only carries results.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
