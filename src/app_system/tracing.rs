use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, LoggingConfig};
use super::error::SystemError;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn setup_tracing(config: &LoggingConfig) -> Result<(), SystemError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(true);

    match config.log_format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| SystemError::Tracing(e.to_string()))
}
