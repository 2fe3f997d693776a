//! Live channel directory and excluded-channel set

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::Service;

/// Data broadcast services are never listed.
pub const DATA_SERVICE_TYPE: u16 = 192;

/// One entry of [`ChannelDirectory::listing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
  /// Service
  #[serde(flatten)]
  pub service: Service,
  /// Whether the service is hidden from search
  pub excluded: bool,
}

/// Channel directory shared by the search and export paths.
///
/// Services are keyed by service ID. The excluded set may name services
/// the directory does not know yet.
#[derive(Debug, Default)]
pub struct ChannelDirectory {
  services: RwLock<BTreeMap<i64, Service>>,
  excluded: RwLock<BTreeSet<i64>>,
}

impl ChannelDirectory {
  /// Creates an empty directory.
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or replaces services. Returns the number of services written.
  pub fn upsert_services(&self, services: Vec<Service>) -> usize {
    let count = services.len();
    let mut map = self.services.write();
    for service in services {
      map.insert(service.service_id, service);
    }
    debug!(count, total = map.len(), "Services upserted");
    count
  }

  /// Snapshot of all services, ordered by service ID.
  pub fn services(&self) -> Vec<Service> {
    self.services.read().values().cloned().collect()
  }

  /// Looks up one service.
  pub fn service(&self, service_id: i64) -> Option<Service> {
    self.services.read().get(&service_id).cloned()
  }

  /// Adds a service to the excluded set. Returns `false` if it was already there.
  pub fn exclude(&self, service_id: i64) -> bool {
    let added = self.excluded.write().insert(service_id);
    if added {
      info!(service_id, "Service excluded from search");
    }
    added
  }

  /// Removes a service from the excluded set. Returns `false` if it was not there.
  pub fn include(&self, service_id: i64) -> bool {
    let removed = self.excluded.write().remove(&service_id);
    if removed {
      info!(service_id, "Service restored to search");
    }
    removed
  }

  /// Snapshot of the excluded set.
  pub fn excluded(&self) -> BTreeSet<i64> {
    self.excluded.read().clone()
  }

  /// Returns whether `service_id` is excluded.
  pub fn is_excluded(&self, service_id: i64) -> bool {
    self.excluded.read().contains(&service_id)
  }

  /// Services for display.
  ///
  /// Data services are omitted. Order: service type, then services with a
  /// remote control key (by key), then the rest (by service ID).
  pub fn listing(&self) -> Vec<ServiceListing> {
    let excluded = self.excluded();
    let mut listing: Vec<ServiceListing> = self
      .services
      .read()
      .values()
      .filter(|service| service.service_type != DATA_SERVICE_TYPE)
      .map(|service| ServiceListing {
        excluded: excluded.contains(&service.service_id),
        service: service.clone(),
      })
      .collect();

    listing.sort_by_key(|entry| {
      let service = &entry.service;
      (
        service.service_type,
        service.remote_control_key_id == 0,
        service.remote_control_key_id,
        service.service_id,
      )
    });

    listing
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn directory() -> ChannelDirectory {
    let directory = ChannelDirectory::new();
    directory.upsert_services(vec![
      Service::new(1032, "NHK Eテレ", 1).with_remote_control_key(2),
      Service::new(1024, "NHK総合", 1).with_remote_control_key(1),
      Service::new(1400, "地域局", 1),
      Service::new(1100, "臨時", 1),
      Service::new(101, "NHK BS", 2).with_remote_control_key(1),
      Service::new(700, "データ", DATA_SERVICE_TYPE),
    ]);
    directory
  }

  #[test]
  fn listing_order() {
    let ids: Vec<i64> = directory().listing().iter().map(|e| e.service.service_id).collect();
    assert_eq!(ids, vec![1024, 1032, 1100, 1400, 101]);
  }

  #[test]
  fn listing_reports_exclusion() {
    let directory = directory();
    directory.exclude(1032);

    let listing = directory.listing();
    let flagged: Vec<i64> = listing
      .iter()
      .filter(|e| e.excluded)
      .map(|e| e.service.service_id)
      .collect();
    assert_eq!(flagged, vec![1032]);
  }

  #[test]
  fn exclude_and_include() {
    let directory = ChannelDirectory::new();
    assert!(directory.exclude(5));
    assert!(!directory.exclude(5));
    assert!(directory.is_excluded(5));
    assert!(directory.include(5));
    assert!(!directory.include(5));
    assert!(directory.excluded().is_empty());
  }

  #[test]
  fn upsert_replaces_service() {
    let directory = directory();
    directory.upsert_services(vec![Service::new(1024, "NHK総合1", 1)]);
    assert_eq!(directory.service(1024).map(|s| s.name), Some("NHK総合1".to_string()));
    assert_eq!(directory.services().len(), 6);
  }

  #[test]
  fn listing_serializes_flat() {
    let directory = directory();
    directory.exclude(101);
    let json = serde_json::to_value(&directory.listing()[4]).unwrap();
    assert_eq!(json["serviceId"], 101);
    assert_eq!(json["type"], 2);
    assert_eq!(json["excluded"], true);
  }
}
