//! ロギングの初期化

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogLevel;

/// Builds the filter: `RUST_LOG` when set and valid, else `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Installs the global `fmt` subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(level: LogLevel) -> bool {
  tracing_subscriber::registry()
    .with(env_filter(level))
    .with(tracing_subscriber::fmt::layer())
    .try_init()
    .is_ok()
}
