use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging for the admin console.
///
/// Keeps stdout clean for command output by logging to stderr at `warn` by
/// default; raise with `LOG_LEVEL=debug` (or a full filter via the standard
/// `RUST_LOG`) to watch individual requests go out.
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "collegiate={log_level},collegiate_client={log_level},collegiate_session={log_level},hyper=warn,reqwest=warn"
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
