use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Install the tracing subscriber. JSON output is line-delimited for log
/// shippers; the plain format keeps source locations for local work.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scriba=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(
        port = port,
        environment = %config.environment,
        json_format = config.json_format,
        "Logging initialized"
    );
}
