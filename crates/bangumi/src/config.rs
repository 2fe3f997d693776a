// crates/bangumi/src/config.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::iepg::IepgOptions;

/// Allowed range for `export.utc_offset_hours`
const MIN_UTC_OFFSET_HOURS: i32 = -12;
const MAX_UTC_OFFSET_HOURS: i32 = 14;

/// Top-level configuration for bangumi.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BangumiConfig {
  /// [search] section
  #[serde(default)]
  pub search: SearchConfig,
  /// [export] section
  #[serde(default)]
  pub export: ExportConfig,
  /// [store] section
  #[serde(default)]
  pub store: StoreConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [search] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
  /// Longest accepted query, in bytes
  #[serde(default = "default_max_query_bytes")]
  pub max_query_bytes: usize,
}

fn default_max_query_bytes() -> usize {
  1024
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      max_query_bytes: default_max_query_bytes(),
    }
  }
}

/// [export] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
  /// Local time zone of iEPG dates, in whole hours east of UTC (default 9 = JST)
  #[serde(default = "default_utc_offset_hours")]
  pub utc_offset_hours: i32,
  /// Station name used for services missing from the channel directory
  #[serde(default = "default_unknown_station_name")]
  pub unknown_station_name: String,
}

fn default_utc_offset_hours() -> i32 {
  9
}

fn default_unknown_station_name() -> String {
  "未知の放送局".to_string()
}

impl Default for ExportConfig {
  fn default() -> Self {
    Self {
      utc_offset_hours: default_utc_offset_hours(),
      unknown_station_name: default_unknown_station_name(),
    }
  }
}

/// [store] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
  /// JSON file loaded into the store at startup.
  ///
  /// If omitted, the store starts empty.
  #[serde(default)]
  pub seed_file: Option<PathBuf>,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string for `tracing_subscriber::EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "trace" => Ok(LogLevel::Trace),
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      other => Err(format!("unknown log level: {other}")),
    }
  }
}

// ===== Accessor Methods =====

impl BangumiConfig {
  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `search.max_query_bytes` >= 1
  /// - `export.utc_offset_hours` is within -12..=14
  /// - `export.unknown_station_name` is not empty
  /// - `store.seed_file` is an existing file, if given
  ///
  /// # Errors
  /// Returns the `ConfigError` of the first failing item.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // search.max_query_bytes >= 1
    if self.search.max_query_bytes < 1 {
      return Err(ConfigError::InvalidMaxQueryBytes {
        actual: self.search.max_query_bytes,
      });
    }

    // export.utc_offset_hours is within range
    let offset = self.export.utc_offset_hours;
    if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset) {
      return Err(ConfigError::InvalidUtcOffset {
        min: MIN_UTC_OFFSET_HOURS,
        max: MAX_UTC_OFFSET_HOURS,
        actual: offset,
      });
    }

    // export.unknown_station_name is not empty
    if self.export.unknown_station_name.trim().is_empty() {
      return Err(ConfigError::EmptyUnknownStationName);
    }

    // store.seed_file is an existing file
    if let Some(seed_file) = &self.store.seed_file
      && !seed_file.is_file()
    {
      return Err(ConfigError::InvalidSeedFile {
        path: seed_file.clone(),
      });
    }

    Ok(())
  }

  /// Returns the longest accepted query, in bytes.
  pub fn max_query_bytes(&self) -> usize {
    self.search.max_query_bytes
  }

  /// Returns the iEPG rendering options.
  ///
  /// # Errors
  /// [`ConfigError::InvalidUtcOffset`] when the offset is out of range.
  pub fn iepg_options(&self) -> Result<IepgOptions, ConfigError> {
    let hours = self.export.utc_offset_hours;
    IepgOptions::with_offset_hours(hours, self.export.unknown_station_name.clone())
      .filter(|_| (MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&hours))
      .ok_or(ConfigError::InvalidUtcOffset {
        min: MIN_UTC_OFFSET_HOURS,
        max: MAX_UTC_OFFSET_HOURS,
        actual: hours,
      })
  }

  /// Returns the seed file path, if any.
  pub fn seed_file(&self) -> Option<&Path> {
    self.store.seed_file.as_deref()
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use tempfile::{NamedTempFile, TempDir};

  // ─── Deserialize Tests ────────────────────────────────────────────────

  #[test]
  fn empty_document_uses_defaults() {
    let config: BangumiConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config.max_query_bytes(), 1024);
    assert_eq!(config.export.utc_offset_hours, 9);
    assert_eq!(config.export.unknown_station_name, "未知の放送局");
    assert!(config.seed_file().is_none());
    assert_eq!(config.log_level(), LogLevel::Info);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn sections_are_read() {
    let config: BangumiConfig = serde_json::from_value(json!({
      "search": { "max_query_bytes": 64 },
      "export": { "utc_offset_hours": 0, "unknown_station_name": "不明" },
      "logging": { "level": "debug" }
    }))
    .unwrap();

    assert_eq!(config.max_query_bytes(), 64);
    assert_eq!(config.log_level(), LogLevel::Debug);
    let options = config.iepg_options().unwrap();
    assert_eq!(options.unknown_station_name, "不明");
    assert_eq!(options.utc_offset.local_minus_utc(), 0);
  }

  #[test]
  fn log_level_parses_case_insensitively() {
    assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert!("verbose".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Trace.as_str(), "trace");
  }

  // ─── Validation Tests ─────────────────────────────────────────────────

  #[test]
  fn validate_rejects_zero_query_bytes() {
    let mut config = BangumiConfig::default();
    config.search.max_query_bytes = 0;

    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidMaxQueryBytes { actual: 0 })
    ));
  }

  #[test]
  fn validate_accepts_offset_bounds() {
    let mut config = BangumiConfig::default();
    config.export.utc_offset_hours = -12;
    assert!(config.validate().is_ok());
    config.export.utc_offset_hours = 14;
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_offset_out_of_range() {
    let mut config = BangumiConfig::default();
    config.export.utc_offset_hours = 15;

    let err = config.validate().unwrap_err();
    assert!(matches!(
      err,
      ConfigError::InvalidUtcOffset { min: -12, max: 14, actual: 15 }
    ));
    assert!(config.iepg_options().is_err());
  }

  #[test]
  fn validate_rejects_blank_station_name() {
    let mut config = BangumiConfig::default();
    config.export.unknown_station_name = "  ".to_string();

    assert!(matches!(
      config.validate(),
      Err(ConfigError::EmptyUnknownStationName)
    ));
  }

  #[test]
  fn validate_accepts_existing_seed_file() {
    let file = NamedTempFile::new().unwrap();
    let mut config = BangumiConfig::default();
    config.store.seed_file = Some(file.path().to_path_buf());

    assert!(config.validate().is_ok());
    assert_eq!(config.seed_file(), Some(file.path()));
  }

  #[test]
  fn validate_rejects_missing_seed_file() {
    let dir = TempDir::new().unwrap();
    let mut config = BangumiConfig::default();
    config.store.seed_file = Some(dir.path().join("missing.json"));

    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidSeedFile { .. })
    ));
  }

  #[test]
  fn validate_rejects_directory_seed_file() {
    let dir = TempDir::new().unwrap();
    let mut config = BangumiConfig::default();
    config.store.seed_file = Some(dir.path().to_path_buf());

    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidSeedFile { .. })
    ));
  }

  #[test]
  fn validate_reports_query_bytes_before_offset() {
    let mut config = BangumiConfig::default();
    config.search.max_query_bytes = 0;
    config.export.utc_offset_hours = 99;

    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidMaxQueryBytes { .. })
    ));
  }
}
