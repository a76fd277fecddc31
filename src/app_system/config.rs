//! Runtime settings, read from flags or the environment.

use std::num::NonZeroUsize;

use clap::Args;

pub const DEFAULT_CHANNEL_CAPACITY: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Clone, Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

/// Inventory store settings.
#[derive(Clone, Debug, Args)]
pub struct InventoryConfig {
    /// Capacity of the product actor's request channel (at least 1)
    #[arg(long, env = "INVENTORY_CHANNEL_CAPACITY", default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    pub channel_capacity: NonZeroUsize,

    /// Preload the demo catalog at startup
    #[arg(
        long,
        env = "INVENTORY_SEED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: true,
        }
    }
}
