use tracing_subscriber::EnvFilter;

/// Route store logs to the test writer. Safe to call from every test.
pub fn init_tracing() {
    // Default to debug-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
