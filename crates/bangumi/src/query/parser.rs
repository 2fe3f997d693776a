//! 検索クエリ解析モジュール
//!
//! 自由入力の検索式を、必須語・フレーズ・除外語に分解する。
//!
//! # 文法
//! - 空白区切りの語は必須語（AND）
//! - `-語` は除外語（`-` 単独は必須語）
//! - `"..."` はフレーズ（語順どおりに連続して含まれること）
//! - `\"` はフレーズを開閉しない引用符
//! - フレーズ外のその他のバックスラッシュは文字そのもの（`C:\path`）
//! - フレーズ内の `\x` は `x`（`\\` はバックスラッシュ1文字）
//!
//! 閉じられていないフレーズは、通常の語の並びとして扱う。
//! 解析は失敗しない。

use std::collections::BTreeSet;

use tracing::debug;

use crate::normalizer::canonicalize;

/// One term of a parsed query.
///
/// The text is always canonicalized, never the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchTerm {
  /// Must appear in the title or the synopsis
  Required(String),
  /// Must appear contiguously in the title or the synopsis
  Phrase(String),
  /// Must appear in neither field
  Excluded(String),
}

impl SearchTerm {
  /// Canonicalized text of the term
  pub fn text(&self) -> &str {
    match self {
      SearchTerm::Required(text) | SearchTerm::Phrase(text) | SearchTerm::Excluded(text) => text,
    }
  }
}

/// Result of [`parse_query`].
///
/// - phrases: first-seen order, duplicates kept
/// - required: value-unique set
/// - excluded: first-seen order, duplicates kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
  phrases: Vec<String>,
  required: BTreeSet<String>,
  excluded: Vec<String>,
}

impl ParsedQuery {
  /// Phrase terms in first-seen order
  pub fn phrases(&self) -> &[String] {
    &self.phrases
  }

  /// Unique required terms
  pub fn required(&self) -> &BTreeSet<String> {
    &self.required
  }

  /// Excluded terms in first-seen order
  pub fn excluded(&self) -> &[String] {
    &self.excluded
  }

  /// Returns whether the query has no terms at all
  pub fn is_empty(&self) -> bool {
    self.phrases.is_empty() && self.required.is_empty() && self.excluded.is_empty()
  }

  /// All terms in clause construction order: phrases, required, excluded.
  pub fn terms(&self) -> Vec<SearchTerm> {
    let phrases = self.phrases.iter().cloned().map(SearchTerm::Phrase);
    let required = self.required.iter().cloned().map(SearchTerm::Required);
    let excluded = self.excluded.iter().cloned().map(SearchTerm::Excluded);

    phrases.chain(required).chain(excluded).collect()
  }

  fn push_phrase(&mut self, raw: &str) {
    if raw.is_empty() {
      return;
    }
    let phrase = canonicalize(raw);
    if !phrase.is_empty() {
      self.phrases.push(phrase);
    }
  }

  /// Classifies one whitespace-free word.
  fn push_word(&mut self, word: &str) {
    if word.is_empty() {
      return;
    }

    match word.strip_prefix('-') {
      Some(rest) if !rest.is_empty() => {
        let term = canonicalize(rest);
        if !term.is_empty() {
          self.excluded.push(term);
        }
      }
      _ => {
        let term = canonicalize(word);
        if !term.is_empty() {
          self.required.insert(term);
        }
      }
    }
  }
}

/// Parses a free-text search expression.
///
/// Never fails; malformed quoting degrades to word search.
///
/// # Examples
/// ```
/// use bangumi::query::parse_query;
///
/// let query = parse_query(r#"ドラマ "美味しい料理" -再放送"#);
/// assert_eq!(query.phrases(), ["美味しい料理"]);
/// assert!(query.required().contains("ドラマ"));
/// assert_eq!(query.excluded(), ["再放送"]);
/// ```
pub fn parse_query(query: &str) -> ParsedQuery {
  let mut parsed = ParsedQuery::default();

  let mut in_phrase = false;
  let mut escape_next = false;
  let mut phrase = String::new();
  let mut word = String::new();

  for c in query.chars() {
    if escape_next {
      escape_next = false;
      if in_phrase {
        // フレーズ内ではバックスラッシュを取り除き、次の文字をそのまま使う
        phrase.push(c);
        continue;
      }
      // フレーズ外のバックスラッシュは引用符の直前でのみ消える
      if c == '"' {
        word.push(c);
        continue;
      }
      word.push('\\');
      if c == '\\' {
        word.push(c);
        continue;
      }
    } else if c == '\\' {
      escape_next = true;
      continue;
    }

    if c == '"' {
      if in_phrase {
        parsed.push_phrase(&phrase);
        phrase.clear();
      } else {
        // 引用符は語の区切りにもなる
        parsed.push_word(&word);
        word.clear();
      }
      in_phrase = !in_phrase;
      continue;
    }

    if in_phrase {
      phrase.push(c);
    } else if c.is_whitespace() {
      parsed.push_word(&word);
      word.clear();
    } else {
      word.push(c);
    }
  }

  if in_phrase {
    // 閉じられていないフレーズは通常の語として扱う
    debug!(fragment = %phrase, "Unterminated phrase, falling back to word search");
    for w in phrase.split_whitespace() {
      parsed.push_word(w);
    }
  } else if escape_next {
    word.push('\\');
  }
  parsed.push_word(&word);

  debug!(
    query = %query,
    phrases = ?parsed.phrases,
    required = ?parsed.required,
    excluded = ?parsed.excluded,
    "Search query parsed"
  );

  parsed
}
