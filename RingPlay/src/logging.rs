//! Logging setup.
//!
//! Level precedence: `--log-level`, then `RUST_LOG`, then the
//! `host.logger.min_level` configuration key. Logs go to stderr so they
//! never interleave with the queue drawn on stdout.

use ringconfig::Config;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Picks the filter directive from the available sources.
pub fn filter_directive(
    cli_level: Option<&str>,
    env_level: Option<String>,
    config_level: &str,
) -> String {
    cli_level
        .map(str::to_string)
        .or(env_level.filter(|level| !level.trim().is_empty()))
        .unwrap_or_else(|| config_level.to_string())
        .to_lowercase()
}

pub fn init_logging(cli_level: Option<&str>, config: &Config) {
    let directive = filter_directive(
        cli_level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.get_log_min_level(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = Registry::default().with(filter);

    if config.get_log_enable_console() {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true),
            )
            .init();
    } else {
        subscriber.init();
    }

    tracing::debug!(directive = directive.as_str(), "Logging initialized");
}
