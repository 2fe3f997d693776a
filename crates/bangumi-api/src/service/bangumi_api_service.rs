//! Program Search Service

use std::time::Instant;

use bangumi::BangumiService;
use bangumi::models::{Program, Service};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{
  ExcludedServicesResponse, ExclusionResponse, IngestResponse, SearchRequest, SearchResponse,
  ServicesResponse, UpsertServicesResponse,
};

/// Common interface for the program search service
///
/// This trait allows swapping production implementation (`BangumiApiServiceFull`) with
/// test stubs/mocks.
pub trait BangumiApiService: Send + Sync {
  /// Searches programs
  ///
  /// # Errors
  /// - Query exceeds the maximum length
  fn search(&self, request: SearchRequest) -> Result<SearchResponse>;

  /// Renders one program as Shift_JIS-encoded iEPG
  ///
  /// # Errors
  /// - Unknown program
  /// - Internal error
  fn export_iepg(&self, program_id: i64) -> Result<Vec<u8>>;

  /// Lists services in display order
  fn services(&self) -> Result<ServicesResponse>;

  /// Inserts or replaces programs
  fn ingest_programs(&self, programs: Vec<Program>) -> Result<IngestResponse>;

  /// Inserts or replaces services
  fn upsert_services(&self, services: Vec<Service>) -> Result<UpsertServicesResponse>;

  /// Lists excluded service IDs
  fn excluded_services(&self) -> Result<ExcludedServicesResponse>;

  /// Hides a service from search
  fn exclude_service(&self, service_id: i64) -> Result<ExclusionResponse>;

  /// Restores a service to search
  fn include_service(&self, service_id: i64) -> Result<ExclusionResponse>;
}

/// Program Search Service backed by [`BangumiService`]
#[derive(Debug)]
pub struct BangumiApiServiceFull {
  /// Core facade
  inner: BangumiService,
  /// Longest accepted query, in bytes
  max_query_bytes: usize,
}

impl BangumiApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including seed file)
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the seed file cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    let inner = BangumiService::init(&config.to_core_config())?;
    Ok(Self::from_service(inner, config.max_query_bytes))
  }

  /// Wraps an existing core service
  #[must_use]
  pub fn from_service(inner: BangumiService, max_query_bytes: usize) -> Self {
    Self {
      inner,
      max_query_bytes,
    }
  }

  /// Core facade
  #[must_use]
  pub fn inner(&self) -> &BangumiService {
    &self.inner
  }

  /// Searches programs
  ///
  /// # Errors
  /// If the query exceeds the maximum length
  pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
    // Validate query length
    let query_bytes = request.query.len();
    if query_bytes > self.max_query_bytes {
      return Err(ApiError::query_too_long(query_bytes, self.max_query_bytes));
    }

    // Start measuring processing time
    let start = Instant::now();

    let programs = self.inner.search_for_display(&request.query, &request.filters);

    // End measuring processing time
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(SearchResponse {
      count: programs.len(),
      programs,
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `BangumiApiService`
impl BangumiApiService for BangumiApiServiceFull {
  fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
    // Note: Writing `self.search(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    BangumiApiServiceFull::search(self, request)
  }

  fn export_iepg(&self, program_id: i64) -> Result<Vec<u8>> {
    Ok(self.inner.export_iepg_bytes(program_id)?)
  }

  fn services(&self) -> Result<ServicesResponse> {
    Ok(ServicesResponse {
      services: self.inner.services(),
    })
  }

  fn ingest_programs(&self, programs: Vec<Program>) -> Result<IngestResponse> {
    let report = self.inner.ingest_programs(programs);
    Ok(IngestResponse {
      total: report.total,
      inserted: report.inserted,
      updated: report.updated,
    })
  }

  fn upsert_services(&self, services: Vec<Service>) -> Result<UpsertServicesResponse> {
    Ok(UpsertServicesResponse {
      upserted: self.inner.upsert_services(services),
    })
  }

  fn excluded_services(&self) -> Result<ExcludedServicesResponse> {
    Ok(ExcludedServicesResponse {
      service_ids: self.inner.excluded_services().into_iter().collect(),
    })
  }

  fn exclude_service(&self, service_id: i64) -> Result<ExclusionResponse> {
    let changed = self.inner.exclude_service(service_id);
    Ok(ExclusionResponse {
      service_id,
      excluded: true,
      changed,
    })
  }

  fn include_service(&self, service_id: i64) -> Result<ExclusionResponse> {
    let changed = self.inner.include_service(service_id);
    Ok(ExclusionResponse {
      service_id,
      excluded: false,
      changed,
    })
  }
}
