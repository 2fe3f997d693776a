//! 番組検索述語の構築
//!
//! 解析済みクエリと非テキスト条件（チャンネル・時刻・放送種別・除外チャンネル）を
//! 1つの述語にまとめる。述語はレコードストアに渡され、各レコードの判定に使われる。

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{ChannelCategory, ProgramRecord, Service};

use super::parser::{ParsedQuery, SearchTerm};

/// Non-text search conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
  /// Exact service ID. Takes precedence over `channel_category`.
  pub channel_id: Option<i64>,
  /// Inclusive lower bound on start time (epoch milliseconds)
  pub start_from: Option<i64>,
  /// Inclusive upper bound on start time (epoch milliseconds)
  pub start_to: Option<i64>,
  /// Channel category, resolved against the channel directory
  pub channel_category: Option<ChannelCategory>,
  /// Service IDs hidden from search results
  pub excluded_channels: BTreeSet<i64>,
}

/// Constraint on a record's service ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelConstraint {
  /// Any service
  Any,
  /// Exactly this service
  Exactly(i64),
  /// One of these services. An empty set admits nothing.
  OneOf(BTreeSet<i64>),
  /// None of these services
  NoneOf(BTreeSet<i64>),
}

impl ChannelConstraint {
  /// Returns whether `service_id` satisfies the constraint.
  pub fn admits(&self, service_id: i64) -> bool {
    match self {
      ChannelConstraint::Any => true,
      ChannelConstraint::Exactly(id) => *id == service_id,
      ChannelConstraint::OneOf(ids) => ids.contains(&service_id),
      ChannelConstraint::NoneOf(ids) => !ids.contains(&service_id),
    }
  }

  /// Returns whether no record can satisfy the constraint.
  pub fn is_unsatisfiable(&self) -> bool {
    matches!(self, ChannelConstraint::OneOf(ids) if ids.is_empty())
  }
}

/// Compiled filter over program records.
///
/// Built from identical inputs, two predicates compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPredicate {
  terms: Vec<SearchTerm>,
  channel: ChannelConstraint,
  start_from: Option<i64>,
  start_to: Option<i64>,
}

impl ProgramPredicate {
  /// Builds a predicate.
  ///
  /// # Arguments
  /// - `query`: parsed text query
  /// - `filters`: non-text conditions
  /// - `services`: current channel directory, used to resolve `filters.channel_category`
  ///
  /// # Channel rules
  /// 1. `channel_id` given → exactly that service (category and exclusions ignored)
  /// 2. `channel_category` given → services of that category minus excluded ones.
  ///    If none remain, nothing matches.
  /// 3. otherwise → every service except the excluded ones
  pub fn build(query: &ParsedQuery, filters: &SearchFilters, services: &[Service]) -> Self {
    let channel = match (filters.channel_id, filters.channel_category) {
      (Some(id), _) => ChannelConstraint::Exactly(id),
      (None, Some(category)) => {
        let ids: BTreeSet<i64> = services
          .iter()
          .filter(|service| service.is_in_category(category))
          .map(|service| service.service_id)
          .filter(|id| !filters.excluded_channels.contains(id))
          .collect();

        if ids.is_empty() {
          debug!(%category, "No services in category; predicate matches nothing");
        }
        ChannelConstraint::OneOf(ids)
      }
      (None, None) if filters.excluded_channels.is_empty() => ChannelConstraint::Any,
      (None, None) => ChannelConstraint::NoneOf(filters.excluded_channels.clone()),
    };

    let predicate = Self {
      terms: query.terms(),
      channel,
      start_from: filters.start_from,
      start_to: filters.start_to,
    };

    debug!(
      terms = predicate.terms.len(),
      channel = ?predicate.channel,
      start_from = ?predicate.start_from,
      start_to = ?predicate.start_to,
      "Search predicate built"
    );

    predicate
  }

  /// Predicate that admits every record.
  pub fn match_all() -> Self {
    Self {
      terms: Vec::new(),
      channel: ChannelConstraint::Any,
      start_from: None,
      start_to: None,
    }
  }

  /// Text clauses in construction order
  pub fn terms(&self) -> &[SearchTerm] {
    &self.terms
  }

  /// Channel constraint
  pub fn channel(&self) -> &ChannelConstraint {
    &self.channel
  }

  /// Inclusive start-time bounds
  pub fn start_range(&self) -> (Option<i64>, Option<i64>) {
    (self.start_from, self.start_to)
  }

  /// Returns whether no record can match.
  pub fn is_unsatisfiable(&self) -> bool {
    self.channel.is_unsatisfiable()
  }

  /// Evaluates the predicate against a record.
  pub fn matches(&self, record: &ProgramRecord) -> bool {
    if !self.channel.admits(record.service_id()) {
      return false;
    }

    let start = record.start_at();
    if self.start_from.is_some_and(|from| start < from) {
      return false;
    }
    if self.start_to.is_some_and(|to| start > to) {
      return false;
    }

    self.terms.iter().all(|term| term_matches(term, record))
  }
}

/// Evaluates one text clause. Each term may match in either field.
fn term_matches(term: &SearchTerm, record: &ProgramRecord) -> bool {
  match term {
    SearchTerm::Required(text) | SearchTerm::Phrase(text) => any_field_contains(record, text),
    SearchTerm::Excluded(text) => !any_field_contains(record, text),
  }
}

fn any_field_contains(record: &ProgramRecord, needle: &str) -> bool {
  record.name_for_search().contains(needle) || record.description_for_search().contains(needle)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Program;
  use crate::query::parse_query;

  fn record(id: i64, service_id: i64, start_at: i64, name: &str, description: &str) -> ProgramRecord {
    ProgramRecord::new(Program::new(id, service_id, start_at, 1_800_000, name, description))
  }

  fn text_predicate(query: &str) -> ProgramPredicate {
    ProgramPredicate::build(&parse_query(query), &SearchFilters::default(), &[])
  }

  fn services() -> Vec<Service> {
    vec![
      Service::new(1024, "NHK総合", 1),
      Service::new(1025, "NHK Eテレ", 1),
      Service::new(101, "NHK BS", 2),
      Service::new(55, "スカパー", 3),
    ]
  }

  // ─── text ───────────────────────────────────────────────────────────

  #[test]
  fn empty_query_matches_everything() {
    let predicate = text_predicate("");
    assert!(predicate.matches(&record(1, 1, 0, "anything", "")));
  }

  #[test]
  fn required_term_matches_title_or_synopsis() {
    let predicate = text_predicate("スポーツ");

    assert!(predicate.matches(&record(1, 1, 0, "スポーツ中継", "")));
    assert!(predicate.matches(&record(2, 1, 0, "ニュース", "最後にスポーツ")));
    assert!(!predicate.matches(&record(3, 1, 0, "ニュース", "天気")));
  }

  #[test]
  fn required_terms_may_match_in_different_fields() {
    let predicate = text_predicate("ドラマ 刑事");
    assert!(predicate.matches(&record(1, 1, 0, "月曜ドラマ", "刑事もの")));
    assert!(!predicate.matches(&record(2, 1, 0, "月曜ドラマ", "恋愛もの")));
  }

  #[test]
  fn matching_is_width_and_case_insensitive() {
    let predicate = text_predicate("nhk");
    assert!(predicate.matches(&record(1, 1, 0, "ＮＨＫスペシャル", "")));
  }

  #[test]
  fn excluded_wins_over_required() {
    let predicate = text_predicate("ドラマ -スポーツ");
    assert!(!predicate.matches(&record(1, 1, 0, "特番", "ドラマとスポーツ")));
    assert!(!predicate.matches(&record(2, 1, 0, "スポーツ", "ドラマ")));
    assert!(predicate.matches(&record(3, 1, 0, "ドラマ", "恋愛")));
  }

  #[test]
  fn phrase_requires_contiguous_text() {
    let predicate = text_predicate("\"美味しい料理\"");
    assert!(predicate.matches(&record(1, 1, 0, "今夜の美味しい料理", "")));
    assert!(!predicate.matches(&record(2, 1, 0, "美味しい", "家庭の料理")));
    assert!(!predicate.matches(&record(3, 1, 0, "料理が美味しい", "")));
  }

  #[test]
  fn unterminated_phrase_behaves_like_word() {
    let predicate = text_predicate("\"特集");
    assert_eq!(predicate, text_predicate("特集"));
    assert!(predicate.matches(&record(1, 1, 0, "夏の特集", "")));
  }

  // ─── channel ────────────────────────────────────────────────────────

  #[test]
  fn channel_id_takes_precedence_over_category_and_exclusions() {
    let filters = SearchFilters {
      channel_id: Some(1024),
      channel_category: Some(ChannelCategory::Bs),
      excluded_channels: BTreeSet::from([1024]),
      ..Default::default()
    };
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &services());

    assert_eq!(predicate.channel(), &ChannelConstraint::Exactly(1024));
    assert!(predicate.matches(&record(1, 1024, 0, "", "")));
    assert!(!predicate.matches(&record(2, 101, 0, "", "")));
  }

  #[test]
  fn category_resolves_against_directory_minus_exclusions() {
    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Terrestrial),
      excluded_channels: BTreeSet::from([1025]),
      ..Default::default()
    };
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &services());

    assert_eq!(
      predicate.channel(),
      &ChannelConstraint::OneOf(BTreeSet::from([1024]))
    );
    assert!(predicate.matches(&record(1, 1024, 0, "", "")));
    assert!(!predicate.matches(&record(2, 1025, 0, "", "")));
    assert!(!predicate.matches(&record(3, 101, 0, "", "")));
  }

  #[test]
  fn empty_category_matches_nothing() {
    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Cs),
      ..Default::default()
    };
    // no CS services in the directory
    let directory = vec![Service::new(1024, "NHK総合", 1)];
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &directory);

    assert!(predicate.is_unsatisfiable());
    assert!(!predicate.matches(&record(1, 1024, 0, "", "")));
    assert!(!predicate.matches(&record(2, 55, 0, "", "")));
  }

  #[test]
  fn category_fully_excluded_matches_nothing() {
    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Bs),
      excluded_channels: BTreeSet::from([101]),
      ..Default::default()
    };
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &services());
    assert!(predicate.is_unsatisfiable());
  }

  #[test]
  fn exclusions_apply_without_channel_filters() {
    let filters = SearchFilters {
      excluded_channels: BTreeSet::from([101]),
      ..Default::default()
    };
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &services());

    assert!(predicate.matches(&record(1, 1024, 0, "", "")));
    assert!(!predicate.matches(&record(2, 101, 0, "", "")));
  }

  #[test]
  fn no_filters_is_any_channel() {
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &SearchFilters::default(), &[]);
    assert_eq!(predicate.channel(), &ChannelConstraint::Any);
    assert_eq!(predicate, ProgramPredicate::match_all());
  }

  // ─── time ───────────────────────────────────────────────────────────

  #[test]
  fn start_bounds_are_inclusive() {
    let filters = SearchFilters {
      start_from: Some(1_000),
      start_to: Some(2_000),
      ..Default::default()
    };
    let predicate = ProgramPredicate::build(&ParsedQuery::default(), &filters, &[]);

    assert!(!predicate.matches(&record(1, 1, 999, "", "")));
    assert!(predicate.matches(&record(2, 1, 1_000, "", "")));
    assert!(predicate.matches(&record(3, 1, 2_000, "", "")));
    assert!(!predicate.matches(&record(4, 1, 2_001, "", "")));
  }

  #[test]
  fn identical_inputs_build_equal_predicates() {
    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Terrestrial),
      start_from: Some(10),
      ..Default::default()
    };
    let a = ProgramPredicate::build(&parse_query("a b -c \"d e\""), &filters, &services());
    let b = ProgramPredicate::build(&parse_query("a b -c \"d e\""), &filters, &services());
    assert_eq!(a, b);
  }
}
