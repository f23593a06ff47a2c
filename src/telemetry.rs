use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, or by `default_directive`
/// when it isn't set.
///
/// `log` records (e.g. from `actix_web::middleware::Logger`) are forwarded too.
pub fn init_telemetry(default_directive: &str) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install the tracing subscriber: {e}"))
}
