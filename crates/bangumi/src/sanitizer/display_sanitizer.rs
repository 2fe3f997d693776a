//! DisplaySanitizer: 外字・絵文字の置換とエンコード可能性の保証

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::charmap::CharacterMap;

use super::rules::{
  BOX_PLACEHOLDER, EMOJI_PLACEHOLDER, FALLBACK_RULES, GAIJI_PLACEHOLDER, enclosed_ideograph,
  is_char_encodable, is_enclosed_ideograph, is_encodable, is_gaiji, is_pictograph,
};

/// Sanitizer backed by the shared standard character map.
static STANDARD: LazyLock<DisplaySanitizer> = LazyLock::new(DisplaySanitizer::default);

/// Converts program text into a form the legacy display encoding accepts.
///
/// Both passes are total: every input produces an output, and the output of
/// [`sanitize`](Self::sanitize) always encodes to Shift_JIS without loss.
/// The sanitizer holds only a read-only table and can be shared across threads.
#[derive(Debug, Clone)]
pub struct DisplaySanitizer {
  map: Arc<CharacterMap>,
}

impl DisplaySanitizer {
  /// Creates a sanitizer over `map`.
  pub fn new(map: Arc<CharacterMap>) -> Self {
    Self { map }
  }

  /// The lookup table in use
  pub fn character_map(&self) -> &CharacterMap {
    &self.map
  }

  /// Replaces legacy external characters and pictographs with
  /// meaningful text. Other characters are copied unchanged.
  ///
  /// # Rules (per code point, first match wins)
  /// 1. legacy external character → table entry, else `・`
  /// 2. U+1F000 and above → table entry, else
  ///    - Enclosed Ideographic Supplement → fixed bracketed kanji/kana, else `[囲漢字]`
  ///    - otherwise → `[絵文字]`
  /// 3. anything else → copied
  pub fn normalize_special(&self, text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
      if is_gaiji(c) {
        out.push_str(self.map.get(c).unwrap_or(GAIJI_PLACEHOLDER));
      } else if is_pictograph(c) {
        out.push_str(self.pictograph(c));
      } else {
        out.push(c);
      }
    }

    out
  }

  fn pictograph(&self, c: char) -> &'static str {
    if let Some(mapped) = self.map.get(c) {
      return mapped;
    }
    if is_enclosed_ideograph(c) {
      enclosed_ideograph(c)
    } else {
      EMOJI_PLACEHOLDER
    }
  }

  /// Replaces every character Shift_JIS cannot encode.
  ///
  /// A table replacement is used only when it is encodable itself; otherwise
  /// the character falls back to a placeholder chosen by its category.
  pub fn sanitize_for_encoding(&self, text: &str) -> String {
    if is_encodable(text) {
      return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut replaced = 0usize;

    for c in text.chars() {
      if is_char_encodable(c) {
        out.push(c);
        continue;
      }

      replaced += 1;
      match self.map.get(c).filter(|mapped| is_encodable(mapped)) {
        Some(mapped) => out.push_str(mapped),
        None => out.push_str(fallback(c)),
      }
    }

    debug!(replaced, "Unencodable characters replaced");

    out
  }

  /// [`normalize_special`](Self::normalize_special) followed by
  /// [`sanitize_for_encoding`](Self::sanitize_for_encoding).
  pub fn sanitize(&self, text: &str) -> String {
    self.sanitize_for_encoding(&self.normalize_special(text))
  }
}

impl Default for DisplaySanitizer {
  fn default() -> Self {
    Self::new(CharacterMap::shared())
  }
}

fn fallback(c: char) -> &'static str {
  FALLBACK_RULES
    .iter()
    .find(|(applies, _)| applies(c))
    .map_or(BOX_PLACEHOLDER, |&(_, placeholder)| placeholder)
}

/// [`DisplaySanitizer::normalize_special`] with the standard table.
pub fn normalize_special(text: &str) -> String {
  STANDARD.normalize_special(text)
}

/// Full sanitization with the standard table.
pub fn sanitize_for_display(text: &str) -> String {
  STANDARD.sanitize(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sanitizer::rules::{ENCLOSED_IDEOGRAPH_PLACEHOLDER, KANA_PLACEHOLDER, KANJI_PLACEHOLDER};
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  // ─── normalize_special ───────────────────────────────────────────────────

  #[test]
  fn enclosed_ideographs_become_bracketed_kanji() {
    assert_eq!(
      normalize_special("🈚🈯🈲🈳🈴🈵 テスト"),
      "[無][指][禁][空][合][満] テスト"
    );
  }

  #[test]
  fn emoji_become_placeholder() {
    assert_eq!(normalize_special("😀😃😄"), "[絵文字][絵文字][絵文字]");
  }

  #[test]
  fn unknown_enclosed_ideograph_gets_generic_placeholder() {
    assert_eq!(normalize_special("\u{1F260}"), ENCLOSED_IDEOGRAPH_PLACEHOLDER);
  }

  #[test]
  fn fixed_enclosed_table_applies_without_map_entry() {
    let sanitizer = DisplaySanitizer::new(Arc::new(CharacterMap::from_tables(&[])));
    assert_eq!(sanitizer.normalize_special("\u{1F21A}\u{1F2FF}"), "[無][囲漢字]");
    assert_eq!(sanitizer.normalize_special("\u{7A50}"), GAIJI_PLACEHOLDER);
  }

  #[test]
  fn gaiji_are_looked_up() {
    assert_eq!(normalize_special("\u{7A50}\u{7A51}\u{7A52}"), "[HV][SD][Ｐ]");
    assert_eq!(normalize_special("\u{7A60}\u{7A61}\u{7C21}"), "■●→");
  }

  #[test]
  fn ordinary_text_is_unchanged() {
    assert_eq!(normalize_special("ABCDあいうえお123"), "ABCDあいうえお123");
    assert_eq!(normalize_special("[無][指][禁]"), "[無][指][禁]");
    // BMP symbols are left for sanitize_for_encoding
    assert_eq!(normalize_special("☀"), "☀");
  }

  #[test]
  fn supplementary_han_is_treated_as_pictograph_area() {
    assert_eq!(sanitize_for_display("𠮟"), EMOJI_PLACEHOLDER);
  }

  // ─── sanitize_for_encoding ───────────────────────────────────────────────

  #[test]
  fn unencodable_symbols_become_middle_dot() {
    assert_eq!(sanitize_for_display("✓✗❌"), "・・・");
  }

  #[test]
  fn encodable_text_passes_through() {
    let text = "ニュース7 [字][再] ①②③";
    assert_eq!(sanitize_for_display(text), text);
  }

  #[test]
  fn map_replacement_must_be_encodable() {
    // ☀ maps to itself, which Shift_JIS cannot represent
    assert_eq!(sanitize_for_display("☀"), "・");
  }

  #[test]
  fn category_fallbacks() {
    let sanitizer = DisplaySanitizer::default();
    // U+3400 CJK Extension A
    assert_eq!(sanitizer.sanitize_for_encoding("\u{3400}"), KANJI_PLACEHOLDER);
    // U+3094 hiragana VU
    assert_eq!(sanitizer.sanitize_for_encoding("\u{3094}"), KANA_PLACEHOLDER);
    // Hangul syllable
    assert_eq!(sanitizer.sanitize_for_encoding("한"), BOX_PLACEHOLDER);
    // supplementary plane reaching sanitize_for_encoding directly
    assert_eq!(sanitizer.sanitize_for_encoding("\u{10000}"), EMOJI_PLACEHOLDER);
  }

  #[test]
  fn table_replacement_used_when_encodable() {
    let table: &[(char, &'static str)] = &[('\u{2713}', "レ")];
    let sanitizer = DisplaySanitizer::new(Arc::new(CharacterMap::from_tables(&[table])));
    assert_eq!(sanitizer.sanitize_for_encoding("✓"), "レ");
  }

  #[test]
  fn empty_input() {
    assert_eq!(sanitize_for_display(""), "");
  }

  /// 抽出元の範囲と重み
  const SAMPLE_BUCKETS: &[(u32, u32, u32)] = &[
    (0x7A50, 0x7A7B, 1),
    (0x7C21, 0x7C7B, 1),
    (0x7D21, 0x7D7B, 1),
    (0x7E21, 0x7E7D, 1),
    (0x1F000, 0x1FAFF, 4), // emoji, enclosed ideographs
    (0x3040, 0x30FF, 3),   // kana
    (0x4E00, 0x9FFF, 3),   // CJK ideographs
    (0x2000, 0x2BFF, 3),   // BMP punctuation and symbols
    (0x3000, 0x33FF, 2),   // CJK symbols, enclosed CJK
    (0x0000, 0x10FFFF, 2), // anything
  ];

  fn sample_code_point(rng: &mut StdRng) -> char {
    let total: u32 = SAMPLE_BUCKETS.iter().map(|&(_, _, weight)| weight).sum();
    loop {
      let mut pick = rng.gen_range(0..total);
      for &(lo, hi, weight) in SAMPLE_BUCKETS {
        if pick < weight {
          if let Some(c) = char::from_u32(rng.gen_range(lo..=hi)) {
            return c;
          }
          break;
        }
        pick -= weight;
      }
    }
  }

  #[test]
  fn sampled_code_points_always_encode() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let sanitizer = DisplaySanitizer::default();

    let samples: Vec<char> = (0..10_000).map(|_| sample_code_point(&mut rng)).collect();
    assert!(samples.iter().filter(|&&c| is_gaiji(c)).count() > 500);
    assert!(samples.iter().filter(|&&c| is_pictograph(c)).count() > 1_000);

    for &c in &samples {
      let single = sanitizer.sanitize(&c.to_string());
      assert!(is_encodable(&single), "U+{:04X} -> {single}", u32::from(c));
    }

    let text: String = samples.iter().collect();
    assert!(is_encodable(&sanitizer.sanitize(&text)));
  }
}
