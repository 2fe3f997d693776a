//! 検索用正規化（Canonicalizer）
//!
//! 番組名・番組説明を部分一致検索のための安定した形に変換する。
//! 取り込み時の正規化フィールド作成と、クエリ語の正規化の両方で必ずこの関数を使うこと。
//! 両者のアルゴリズムがずれると、どのクエリも一致しなくなる。

use unicode_normalization::UnicodeNormalization;

/// 不動点に達するまでの追加パス数の上限
const MAX_EXTRA_PASSES: usize = 4;

/// Converts text to its search-normalized form.
///
/// # Steps
/// 1. NFKC (compatibility decomposition + canonical composition)
/// 2. Width folding (fullwidth ASCII variants → ASCII, see [`fold_width`])
/// 3. Lowercasing, char by char
/// 4. NFKC again (lowercasing can make a sequence composable, e.g. `ϒ` + U+0343)
/// 5. CR / LF → space
/// 6. Runs of spaces collapsed to a single space
///
/// The steps are repeated until the output no longer changes, so the function
/// is idempotent. Leading and trailing spaces are kept (collapsed, not trimmed).
///
/// # Examples
/// ```
/// use bangumi::normalizer::canonicalize;
///
/// assert_eq!(canonicalize("ＡＢＣ"), "abc");
/// assert_eq!(canonicalize("a\n\nb   c"), "a b c");
/// ```
pub fn canonicalize(text: &str) -> String {
  if text.is_empty() {
    return String::new();
  }

  let mut out = canonical_pass(text);
  for _ in 0..MAX_EXTRA_PASSES {
    let next = canonical_pass(&out);
    if next == out {
      break;
    }
    out = next;
  }

  out
}

fn canonical_pass(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  // 直前に出力した文字が空白か（連続空白の圧縮用）
  let mut last_was_space = false;

  let lowered = text.nfkc().map(fold_width).flat_map(char::to_lowercase);
  for c in lowered.nfkc() {
    let c = match c {
      '\r' | '\n' => ' ',
      other => other,
    };

    if c == ' ' {
      if last_was_space {
        continue;
      }
      last_was_space = true;
    } else {
      last_was_space = false;
    }

    out.push(c);
  }

  out
}

/// Folds a fullwidth character to its halfwidth counterpart.
///
/// - U+FF01..=U+FF5E (fullwidth ASCII variants) → U+0021..=U+007E
/// - U+3000 (ideographic space) → U+0020
/// - U+FFE0..=U+FFE6 (fullwidth signs) → ¢ £ ¬ ¯ ¦ ¥ ₩
///
/// Katakana is left as-is. Any other character is returned unchanged.
pub fn fold_width(c: char) -> char {
  match c {
    '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFF01 + 0x21).unwrap_or(c),
    '\u{3000}' => ' ',
    '\u{FFE0}' => '\u{00A2}',
    '\u{FFE1}' => '\u{00A3}',
    '\u{FFE2}' => '\u{00AC}',
    '\u{FFE3}' => '\u{00AF}',
    '\u{FFE4}' => '\u{00A6}',
    '\u{FFE5}' => '\u{00A5}',
    '\u{FFE6}' => '\u{20A9}',
    _ => c,
  }
}
