pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Diagnostics must go to stderr: stdout carries the protocol frames.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
