//! JSON seed files
//!
//! ```json
//! { "services": [ { "serviceId": 1024, "name": "NHK総合", "type": 1 } ],
//!   "programs": [ { "id": 1, "serviceId": 1024, "startAt": 0, "duration": 60000,
//!                   "name": "ニュース", "description": "" } ],
//!   "excludedServices": [] }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::StoreError;
use crate::models::{Program, Service};

/// Initial contents for the channel directory and the program store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
  /// Services
  #[serde(default)]
  pub services: Vec<Service>,
  /// Programs
  #[serde(default)]
  pub programs: Vec<Program>,
  /// Excluded service IDs
  #[serde(default)]
  pub excluded_services: Vec<i64>,
}

impl SeedData {
  /// Reads a seed file.
  ///
  /// # Errors
  /// - the file cannot be read
  /// - the JSON does not match [`SeedData`]
  pub fn load(path: &Path) -> Result<Self, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::SeedRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let seed: SeedData = serde_json::from_str(&text).map_err(|e| StoreError::SeedParse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    info!(
      path = %path.display(),
      services = seed.services.len(),
      programs = seed.programs.len(),
      excluded = seed.excluded_services.len(),
      "Seed file loaded"
    );

    Ok(seed)
  }
}
