use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr subscriber.
///
/// `RUST_LOG` wins over `level`, which comes from `--log-level`, `PIN_LOG`
/// or the settings file.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(pin_infrastructure::settings::DEFAULT_LOG_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
