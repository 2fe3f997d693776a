//! Merged character substitution table

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use super::tables::{ARIB_GAIJI_SYMBOLS, ARIB_GAIJI_TITLE, UNICODE_EMOJI};

/// Process-wide standard table, built on first use.
static STANDARD: LazyLock<Arc<CharacterMap>> = LazyLock::new(|| Arc::new(CharacterMap::new()));

/// Immutable code point → replacement lookup table.
///
/// Built once from the sub-tables in a fixed order (title glyphs, symbol glyphs,
/// Unicode emoji). On a key collision the later sub-table wins, so emoji entries
/// take precedence over legacy glyph entries.
///
/// The value is read-only after construction; share it with `Arc` and read it
/// from any thread without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
  entries: HashMap<char, &'static str>,
}

impl CharacterMap {
  /// Builds the standard table from the three built-in sub-tables.
  pub fn new() -> Self {
    Self::from_tables(&[ARIB_GAIJI_TITLE, ARIB_GAIJI_SYMBOLS, UNICODE_EMOJI])
  }

  /// Builds a table from sub-tables in the given order.
  ///
  /// Later tables overwrite keys defined by earlier ones.
  pub fn from_tables(tables: &[&[(char, &'static str)]]) -> Self {
    let capacity = tables.iter().map(|t| t.len()).sum();
    let mut entries = HashMap::with_capacity(capacity);

    for table in tables {
      entries.extend(table.iter().copied());
    }

    debug!(entries = entries.len(), "Character map built");

    Self { entries }
  }

  /// Returns the shared standard table.
  pub fn shared() -> Arc<CharacterMap> {
    Arc::clone(&STANDARD)
  }

  /// Looks up the replacement for `c`.
  pub fn get(&self, c: char) -> Option<&'static str> {
    self.entries.get(&c).copied()
  }

  /// Returns whether `c` has a replacement.
  pub fn contains(&self, c: char) -> bool {
    self.entries.contains_key(&c)
  }

  /// Number of distinct keys.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns whether the table is empty.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for CharacterMap {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_map_contains_all_sub_tables() {
    let map = CharacterMap::new();

    // sub-tables are disjoint, so nothing is lost in the merge
    assert_eq!(
      map.len(),
      ARIB_GAIJI_TITLE.len() + ARIB_GAIJI_SYMBOLS.len() + UNICODE_EMOJI.len()
    );
  }

  #[test]
  fn known_mappings() {
    let map = CharacterMap::new();

    assert_eq!(map.get('\u{7A50}'), Some("[HV]"));
    assert_eq!(map.get('\u{7A51}'), Some("[SD]"));
    assert_eq!(map.get('\u{7A65}'), Some("[無]"));
    assert_eq!(map.get('\u{7C21}'), Some("→"));
    assert_eq!(map.get('\u{1F21A}'), Some("[無]"));
    assert_eq!(map.get('\u{1F22F}'), Some("[指]"));
  }

  #[test]
  fn unknown_code_point_is_absent() {
    let map = CharacterMap::new();
    assert_eq!(map.get('a'), None);
    assert!(!map.contains('\u{1F600}'));
  }

  #[test]
  fn later_tables_win_on_collision() {
    const LEGACY: &[(char, &str)] = &[('x', "legacy"), ('y', "only-legacy")];
    const EMOJI: &[(char, &str)] = &[('x', "emoji")];

    let map = CharacterMap::from_tables(&[LEGACY, EMOJI]);
    assert_eq!(map.get('x'), Some("emoji"));
    assert_eq!(map.get('y'), Some("only-legacy"));
    assert_eq!(map.len(), 2);

    let reversed = CharacterMap::from_tables(&[EMOJI, LEGACY]);
    assert_eq!(reversed.get('x'), Some("legacy"));
  }

  #[test]
  fn shared_returns_same_instance() {
    let a = CharacterMap::shared();
    let b = CharacterMap::shared();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(*a, CharacterMap::new());
  }

  #[test]
  fn empty_table() {
    let map = CharacterMap::from_tables(&[]);
    assert!(map.is_empty());
  }
}
