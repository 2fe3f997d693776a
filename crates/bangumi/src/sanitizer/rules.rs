//! 文字分類ルールと代替文字列
//!
//! サニタイザーの各段階は、ここで定義する「判定関数 → 代替文字列」の
//! 順序付きルール列を先頭から評価する。

use encoding_rs::SHIFT_JIS;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// Placeholder for unmapped legacy external characters (外字)
pub const GAIJI_PLACEHOLDER: &str = "・";
/// Placeholder for pictographs
pub const EMOJI_PLACEHOLDER: &str = "[絵文字]";
/// Placeholder for enclosed ideographs with no fixed replacement
pub const ENCLOSED_IDEOGRAPH_PLACEHOLDER: &str = "[囲漢字]";
/// Placeholder for unencodable Han ideographs
pub const KANJI_PLACEHOLDER: &str = "[漢字]";
/// Placeholder for unencodable kana
pub const KANA_PLACEHOLDER: &str = "[仮名]";
/// Replacement for unencodable punctuation and symbols
pub const MIDDLE_DOT: &str = "・";
/// Replacement for anything else
pub const BOX_PLACEHOLDER: &str = "□";

/// Legacy external-character ranges (inclusive).
const GAIJI_RANGES: [(u32, u32); 4] = [
  (0x7A50, 0x7A7B),
  (0x7C21, 0x7C7B),
  (0x7D21, 0x7D7B),
  (0x7E21, 0x7E7D),
];

/// Start of the supplementary symbol / pictograph area
const PICTOGRAPH_START: u32 = 0x1F000;

/// Enclosed Ideographic Supplement
const ENCLOSED_IDEOGRAPH_BLOCK: (u32, u32) = (0x1F200, 0x1F2FF);

/// Category fallback applied when neither the character nor its table
/// replacement can be encoded. Evaluated in order; the first match wins.
pub(crate) const FALLBACK_RULES: &[(fn(char) -> bool, &str)] = &[
  (is_supplementary, EMOJI_PLACEHOLDER),
  (is_han, KANJI_PLACEHOLDER),
  (is_kana, KANA_PLACEHOLDER),
  (is_punctuation_or_symbol, MIDDLE_DOT),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
  let cp = u32::from(c);
  ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Returns whether `c` lies in a legacy external-character range.
pub fn is_gaiji(c: char) -> bool {
  in_ranges(c, &GAIJI_RANGES)
}

/// Returns whether `c` is at or above the pictograph area.
pub fn is_pictograph(c: char) -> bool {
  u32::from(c) >= PICTOGRAPH_START
}

/// Returns whether `c` is in the Enclosed Ideographic Supplement block.
pub fn is_enclosed_ideograph(c: char) -> bool {
  in_ranges(c, &[ENCLOSED_IDEOGRAPH_BLOCK])
}

/// Returns whether `c` is outside the Basic Multilingual Plane.
pub fn is_supplementary(c: char) -> bool {
  u32::from(c) > 0xFFFF
}

/// Returns whether `c` has the Unicode script property Han.
pub fn is_han(c: char) -> bool {
  c.script() == Script::Han
}

/// Returns whether `c` has the Unicode script property Hiragana or Katakana.
///
/// 長音符 `ー` や濁点 `゛` は Common なので含まない。
pub fn is_kana(c: char) -> bool {
  matches!(c.script(), Script::Hiragana | Script::Katakana)
}

/// Returns whether `c` belongs to a punctuation (P*) or symbol (S*) category.
pub fn is_punctuation_or_symbol(c: char) -> bool {
  matches!(
    c.general_category_group(),
    GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol
  )
}

/// Fixed replacements for well-known enclosed ideographs.
pub(crate) fn enclosed_ideograph(c: char) -> &'static str {
  match u32::from(c) {
    0x1F200 => "[ほか]",
    0x1F201 => "[ココ]",
    0x1F21A => "[無]",
    0x1F22F => "[指]",
    0x1F232 => "[禁]",
    0x1F233 => "[空]",
    0x1F234 => "[合]",
    0x1F235 => "[満]",
    0x1F236 => "[有]",
    0x1F237 => "[月]",
    0x1F238 => "[申]",
    0x1F239 => "[割]",
    0x1F23A => "[営]",
    0x1F250 => "[得]",
    0x1F251 => "[可]",
    _ => ENCLOSED_IDEOGRAPH_PLACEHOLDER,
  }
}

/// Returns whether `text` encodes to Shift_JIS without unmappable characters.
pub fn is_encodable(text: &str) -> bool {
  let (_, _, had_unmappable) = SHIFT_JIS.encode(text);
  !had_unmappable
}

/// Single-character form of [`is_encodable`].
pub(crate) fn is_char_encodable(c: char) -> bool {
  if c.is_ascii() {
    return true;
  }
  let mut buf = [0u8; 4];
  is_encodable(c.encode_utf8(&mut buf))
}
