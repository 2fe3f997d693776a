//! 表示用サニタイザー
//!
//! 番組タイトル・概要を、レガシーな表示先（Shift_JIS 固定の録画機器等）で
//! 必ずエンコードできる文字列に変換する。
//!
//! - [`DisplaySanitizer::normalize_special`]: 外字・絵文字を意味のある代替文字列へ置換
//! - [`DisplaySanitizer::sanitize_for_encoding`]: エンコード不能な文字を代替文字列へ置換

pub mod display_sanitizer;
pub mod rules;

pub use display_sanitizer::{DisplaySanitizer, normalize_special, sanitize_for_display};
pub use rules::{
  BOX_PLACEHOLDER, EMOJI_PLACEHOLDER, ENCLOSED_IDEOGRAPH_PLACEHOLDER, GAIJI_PLACEHOLDER,
  KANA_PLACEHOLDER, KANJI_PLACEHOLDER, MIDDLE_DOT, is_encodable,
};
