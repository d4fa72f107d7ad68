//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

/// Resolve the filter directive with priority: CLI > RUST_LOG > config > default.
///
/// `env` is the value of `RUST_LOG`, if set.
pub fn resolve_log_filter(
    cli: Option<String>,
    env: Option<String>,
    config: &LoggingConfig,
) -> String {
    cli.or(env)
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let fmt_layer = match format {
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(filter: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            format: LogFormat::Text,
            filter: filter.map(str::to_string),
        }
    }

    #[test]
    fn cli_filter_takes_priority() {
        let filter = resolve_log_filter(
            Some("data_server=trace".to_string()),
            Some("data_server=debug".to_string()),
            &logging(Some("data_server=warn")),
        );

        assert_eq!(filter, "data_server=trace");
    }

    #[test]
    fn env_filter_beats_config() {
        let filter = resolve_log_filter(
            None,
            Some("data_server=debug".to_string()),
            &logging(Some("data_server=warn")),
        );

        assert_eq!(filter, "data_server=debug");
    }

    #[test]
    fn config_filter_beats_default() {
        let filter = resolve_log_filter(None, None, &logging(Some("data_server=warn")));

        assert_eq!(filter, "data_server=warn");
    }

    #[test]
    fn falls_back_to_default() {
        let filter = resolve_log_filter(None, None, &logging(None));

        assert_eq!(filter, DEFAULT_LOG_FILTER);
    }
}
