//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use bangumi::config::{BangumiConfig, LogLevel};

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_UTC_OFFSET_HOURS, MAX_QUERY_LENGTH,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// JSON seed file loaded at startup
  pub seed_file: Option<PathBuf>,
  /// Log level (overridden by `RUST_LOG`)
  pub log_level: LogLevel,
  /// Time zone of iEPG dates, in hours east of UTC
  pub utc_offset_hours: i32,
  /// Longest accepted search query, in bytes
  pub max_query_bytes: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      seed_file: None,
      log_level: LogLevel::Info,
      utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
      max_query_bytes: MAX_QUERY_LENGTH,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `BANGUMI_API_BIND_ADDR`
  /// - `BANGUMI_SEED_FILE`
  /// - `BANGUMI_LOG_LEVEL`
  /// - `BANGUMI_UTC_OFFSET_HOURS`
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (environment variable name → value)
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr =
      lookup("BANGUMI_API_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let seed_file = lookup("BANGUMI_SEED_FILE").filter(|s| !s.is_empty()).map(PathBuf::from);

    let log_level_str =
      lookup("BANGUMI_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = LogLevel::from_str(&log_level_str).map_err(ApiError::config)?;

    let utc_offset_hours = match lookup("BANGUMI_UTC_OFFSET_HOURS") {
      Some(s) => s.trim().parse::<i32>().map_err(|e| {
        ApiError::config(format!("BANGUMI_UTC_OFFSET_HOURS is not an integer: {s}: {e}"))
      })?,
      None => DEFAULT_UTC_OFFSET_HOURS,
    };

    Ok(Self {
      bind_addr,
      seed_file,
      log_level,
      utc_offset_hours,
      max_query_bytes: MAX_QUERY_LENGTH,
    })
  }

  /// Builds the core library configuration
  #[must_use]
  pub fn to_core_config(&self) -> BangumiConfig {
    let mut config = BangumiConfig::default();
    config.search.max_query_bytes = self.max_query_bytes;
    config.export.utc_offset_hours = self.utc_offset_hours;
    config.store.seed_file = self.seed_file.clone();
    config.logging.level = self.log_level;
    config
  }
}
