//! In-memory program store

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::{Program, ProgramRecord};
use crate::query::ProgramPredicate;

use super::program_store::ProgramStore;
use super::report::IngestReport;

/// [`ProgramStore`] backed by an ordered map.
///
/// Reads take a shared lock; `upsert` takes the exclusive lock for the whole batch,
/// so a query never observes a half-applied batch.
#[derive(Debug, Default)]
pub struct InMemoryProgramStore {
  records: RwLock<BTreeMap<i64, ProgramRecord>>,
}

impl InMemoryProgramStore {
  /// Creates an empty store.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a store holding `programs`.
  pub fn with_programs(programs: Vec<Program>) -> Self {
    let store = Self::new();
    store.upsert(programs);
    store
  }
}

impl ProgramStore for InMemoryProgramStore {
  fn query(&self, predicate: &ProgramPredicate) -> Vec<ProgramRecord> {
    if predicate.is_unsatisfiable() {
      debug!("Unsatisfiable predicate; skipping scan");
      return Vec::new();
    }

    let records = self.records.read();
    let mut hits: Vec<ProgramRecord> =
      records.values().filter(|record| predicate.matches(record)).cloned().collect();
    drop(records);

    hits.sort_by_key(|record| (record.start_at(), record.id()));

    debug!(hits = hits.len(), "Program store query finished");

    hits
  }

  fn get(&self, program_id: i64) -> Option<ProgramRecord> {
    self.records.read().get(&program_id).cloned()
  }

  fn upsert(&self, programs: Vec<Program>) -> IngestReport {
    let mut report = IngestReport::default();

    // canonicalize outside the lock
    let records: Vec<ProgramRecord> = programs.into_iter().map(ProgramRecord::new).collect();

    let mut store = self.records.write();
    for record in records {
      match store.insert(record.id(), record) {
        Some(_) => report.record_updated(),
        None => report.record_inserted(),
      }
    }
    drop(store);

    debug!(
      total = report.total,
      inserted = report.inserted,
      updated = report.updated,
      "Programs upserted"
    );

    report
  }

  fn len(&self) -> usize {
    self.records.read().len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::{SearchFilters, parse_query};

  fn program(id: i64, service_id: i64, start_at: i64, name: &str) -> Program {
    Program::new(id, service_id, start_at, 1_800_000, name, "")
  }

  fn search(store: &InMemoryProgramStore, query: &str) -> Vec<i64> {
    let predicate = ProgramPredicate::build(&parse_query(query), &SearchFilters::default(), &[]);
    store.query(&predicate).iter().map(ProgramRecord::id).collect()
  }

  #[test]
  fn results_are_ordered_by_start_time() {
    let store = InMemoryProgramStore::with_programs(vec![
      program(1, 10, 3_000, "ニュース夜"),
      program(2, 10, 1_000, "ニュース朝"),
      program(3, 10, 2_000, "ニュース昼"),
      program(4, 10, 2_000, "ニュース速報"),
    ]);

    assert_eq!(search(&store, "ニュース"), vec![2, 3, 4, 1]);
  }

  #[test]
  fn upsert_replaces_by_id() {
    let store = InMemoryProgramStore::new();

    let first = store.upsert(vec![program(1, 10, 0, "旧タイトル"), program(2, 10, 0, "別番組")]);
    assert_eq!(first.inserted, 2);
    assert!(first.is_all_inserted());

    let second = store.upsert(vec![program(1, 10, 0, "新タイトル")]);
    assert_eq!(second, IngestReport { total: 1, inserted: 0, updated: 1 });

    assert_eq!(store.len(), 2);
    assert!(search(&store, "旧タイトル").is_empty());
    assert_eq!(search(&store, "新タイトル"), vec![1]);
  }

  #[test]
  fn get_returns_canonical_fields() {
    let store = InMemoryProgramStore::with_programs(vec![program(7, 10, 0, "ＡＢＣ")]);
    let record = store.get(7).unwrap();
    assert_eq!(record.name_for_search(), "abc");
    assert_eq!(record.program().name, "ＡＢＣ");
    assert!(store.get(8).is_none());
  }

  #[test]
  fn empty_store() {
    let store = InMemoryProgramStore::new();
    assert!(store.is_empty());
    assert!(search(&store, "").is_empty());
  }
}
