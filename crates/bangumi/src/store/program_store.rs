//! ProgramStore トレイト

use crate::models::{Program, ProgramRecord};
use crate::query::ProgramPredicate;

use super::report::IngestReport;

/// Record store consumed by the search and export paths.
///
/// Implementations evaluate the predicate themselves and must return matches
/// in ascending start-time order. Equal start times are ordered by program ID.
pub trait ProgramStore: Send + Sync {
  /// Returns every record satisfying `predicate`.
  fn query(&self, predicate: &ProgramPredicate) -> Vec<ProgramRecord>;

  /// Looks up one record by program ID.
  fn get(&self, program_id: i64) -> Option<ProgramRecord>;

  /// Inserts or replaces programs, keyed by program ID.
  ///
  /// Canonical search fields are computed here, once per program.
  fn upsert(&self, programs: Vec<Program>) -> IngestReport;

  /// Number of stored records.
  fn len(&self) -> usize;

  /// Returns whether the store is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
