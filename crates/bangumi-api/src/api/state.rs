//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::BangumiApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Program Search Service
  ///
  /// - Production: `Arc::new(BangumiApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubBangumiApiService)`
  pub service: Arc<dyn BangumiApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn BangumiApiService>) -> Self {
    Self { config, service }
  }
}
