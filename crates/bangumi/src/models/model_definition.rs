//! Data Model Definition
use serde::{Deserialize, Serialize};

use crate::normalizer::canonicalize;

/// Series information attached to a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
  /// Series ID
  pub id: i64,
  /// Episode number
  #[serde(default)]
  pub episode: i64,
  /// Last episode number
  #[serde(default)]
  pub last_episode: i64,
  /// Series name
  #[serde(default)]
  pub name: String,
  /// Repeat label
  #[serde(default)]
  pub repeat: i64,
  /// Pattern
  #[serde(default)]
  pub pattern: i64,
  /// Expiry (epoch milliseconds)
  #[serde(default)]
  pub expires_at: i64,
}

/// Broadcast program as delivered by the tuner API
///
/// Times are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
  /// Program ID
  pub id: i64,
  /// Service (channel) ID
  pub service_id: i64,
  /// Start time (epoch milliseconds)
  pub start_at: i64,
  /// Duration (milliseconds)
  pub duration: i64,
  /// Title
  #[serde(default)]
  pub name: String,
  /// Synopsis
  #[serde(default)]
  pub description: String,
  /// Series information
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub series: Option<Series>,
}

impl Program {
  /// Constructor for Program
  pub fn new(
    id: i64,
    service_id: i64,
    start_at: i64,
    duration: i64,
    name: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      id,
      service_id,
      start_at,
      duration,
      name: name.into(),
      description: description.into(),
      series: None,
    }
  }

  /// Builder that attaches series information
  #[must_use]
  pub fn with_series(mut self, series: Series) -> Self {
    self.series = Some(series);
    self
  }

  /// End time (epoch milliseconds)
  pub fn end_at(&self) -> i64 {
    self.start_at.saturating_add(self.duration)
  }
}

/// Stored program: the raw program plus its canonicalized search fields.
///
/// The search fields can only be produced by [`ProgramRecord::new`], so they are
/// always the output of [`canonicalize`] on the current raw fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRecord {
  program: Program,
  name_for_search: String,
  description_for_search: String,
}

impl ProgramRecord {
  /// Builds a record, canonicalizing title and synopsis.
  pub fn new(program: Program) -> Self {
    let name_for_search = canonicalize(&program.name);
    let description_for_search = canonicalize(&program.description);
    Self {
      program,
      name_for_search,
      description_for_search,
    }
  }

  /// Raw program
  pub fn program(&self) -> &Program {
    &self.program
  }

  /// Consumes the record, returning the raw program
  pub fn into_program(self) -> Program {
    self.program
  }

  /// Program ID
  pub fn id(&self) -> i64 {
    self.program.id
  }

  /// Service (channel) ID
  pub fn service_id(&self) -> i64 {
    self.program.service_id
  }

  /// Start time (epoch milliseconds)
  pub fn start_at(&self) -> i64 {
    self.program.start_at
  }

  /// Canonicalized title
  pub fn name_for_search(&self) -> &str {
    &self.name_for_search
  }

  /// Canonicalized synopsis
  pub fn description_for_search(&self) -> &str {
    &self.description_for_search
  }
}

impl From<Program> for ProgramRecord {
  fn from(program: Program) -> Self {
    Self::new(program)
  }
}

/// Channel category used by the search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ChannelCategory {
  /// Terrestrial (地上波)
  Terrestrial,
  /// BS
  Bs,
  /// CS
  Cs,
}

impl ChannelCategory {
  /// Numeric code, compared with [`Service::service_type`]
  ///
  /// - `Terrestrial` → 1
  /// - `Bs` → 2
  /// - `Cs` → 3
  pub fn code(&self) -> u16 {
    match self {
      ChannelCategory::Terrestrial => 1,
      ChannelCategory::Bs => 2,
      ChannelCategory::Cs => 3,
    }
  }

  /// Display name
  pub fn label(&self) -> &'static str {
    match self {
      ChannelCategory::Terrestrial => "地上波",
      ChannelCategory::Bs => "BS",
      ChannelCategory::Cs => "CS",
    }
  }
}

impl TryFrom<u16> for ChannelCategory {
  type Error = String;

  fn try_from(code: u16) -> Result<Self, Self::Error> {
    match code {
      1 => Ok(ChannelCategory::Terrestrial),
      2 => Ok(ChannelCategory::Bs),
      3 => Ok(ChannelCategory::Cs),
      other => Err(format!("channel category must be 1, 2 or 3: {other}")),
    }
  }
}

impl From<ChannelCategory> for u16 {
  fn from(category: ChannelCategory) -> Self {
    category.code()
  }
}

impl std::fmt::Display for ChannelCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Broadcast service (channel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
  /// Service ID
  pub service_id: i64,
  /// Network ID
  #[serde(default)]
  pub network_id: i64,
  /// Station name
  #[serde(default)]
  pub name: String,
  /// Service type, compared with [`ChannelCategory::code`]
  #[serde(default, rename = "type")]
  pub service_type: u16,
  /// Remote control key (0 when unassigned)
  #[serde(default)]
  pub remote_control_key_id: u32,
  /// Channel type ("GR", "BS", "CS", ...)
  #[serde(default)]
  pub channel_type: String,
  /// Channel number
  #[serde(default)]
  pub channel_number: String,
}

impl Service {
  /// Constructor for Service
  pub fn new(service_id: i64, name: impl Into<String>, service_type: u16) -> Self {
    Self {
      service_id,
      network_id: 0,
      name: name.into(),
      service_type,
      remote_control_key_id: 0,
      channel_type: String::new(),
      channel_number: String::new(),
    }
  }

  /// Builder that sets the remote control key
  #[must_use]
  pub fn with_remote_control_key(mut self, key: u32) -> Self {
    self.remote_control_key_id = key;
    self
  }

  /// Builder that sets channel type and number
  #[must_use]
  pub fn with_channel(mut self, channel_type: impl Into<String>, number: impl Into<String>) -> Self {
    self.channel_type = channel_type.into();
    self.channel_number = number.into();
    self
  }

  /// Four-digit station ID: the remote control key if assigned, else the service ID.
  pub fn station_id(&self) -> String {
    if self.remote_control_key_id > 0 {
      format!("{:04}", self.remote_control_key_id)
    } else {
      format!("{:04}", self.service_id)
    }
  }

  /// Returns whether this service belongs to `category`.
  pub fn is_in_category(&self, category: ChannelCategory) -> bool {
    self.service_type == category.code()
  }
}

/// Station details shown next to a program in search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
  /// Four-digit station ID, see [`Service::station_id`]
  pub station_id: String,
  /// Station name
  pub station_name: String,
  /// Remote control key (0 when unassigned)
  pub remote_control_key: u32,
  /// Channel type
  pub channel_type: String,
  /// Channel number
  pub channel_number: String,
}

impl From<&Service> for StationInfo {
  fn from(service: &Service) -> Self {
    Self {
      station_id: service.station_id(),
      station_name: service.name.clone(),
      remote_control_key: service.remote_control_key_id,
      channel_type: service.channel_type.clone(),
      channel_number: service.channel_number.clone(),
    }
  }
}

/// Search result entry: the program plus its station, when the service is known.
///
/// Both parts serialize into one flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramListing {
  /// Program (display-normalized title and synopsis)
  #[serde(flatten)]
  pub program: Program,
  /// Station details; absent for services missing from the directory
  #[serde(flatten)]
  pub station: Option<StationInfo>,
}

impl ProgramListing {
  /// Joins `program` with its service entry.
  pub fn new(program: Program, service: Option<&Service>) -> Self {
    Self {
      program,
      station: service.map(StationInfo::from),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
