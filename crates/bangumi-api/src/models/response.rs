//! Response Model Definition

use serde::Serialize;

use bangumi::models::ProgramListing;
use bangumi::store::ServiceListing;

/// Search Response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
  /// Matching programs, ascending by start time
  ///
  /// Titles and synopses have external characters and pictographs replaced,
  /// and station details are attached when the service is known.
  pub programs: Vec<ProgramListing>,
  /// Number of programs
  pub count: usize,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Program ingest response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
  /// Programs in the request
  pub total: usize,
  /// Newly added programs
  pub inserted: usize,
  /// Replaced programs
  pub updated: usize,
}

/// Service upsert response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertServicesResponse {
  /// Services written
  pub upserted: usize,
}

/// Service listing response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
  /// Services in display order
  pub services: Vec<ServiceListing>,
}

/// Excluded service list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedServicesResponse {
  /// Excluded service IDs, ascending
  pub service_ids: Vec<i64>,
}

/// Response to adding or removing an exclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionResponse {
  /// Target service
  pub service_id: i64,
  /// Whether the service is excluded after the request
  pub excluded: bool,
  /// Whether the request changed anything
  pub changed: bool,
}
