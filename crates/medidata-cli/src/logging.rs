//! stderr logging via `tracing-subscriber`.
//!
//! Filter precedence: `--log-level`, then `MEDIDATA_LOG`, then `warn`.

use crate::args::LogLevel;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "MEDIDATA_LOG";

pub fn filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(level: Option<LogLevel>) {
    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
