use tracing_subscriber::EnvFilter;
use zkns_domain::config::LoggingConfig;

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
