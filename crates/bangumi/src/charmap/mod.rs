//! charmap module
//!
//! 表示用サニタイズで使う文字置換テーブル。

pub mod character_map;
pub mod tables;

/// Re-exports
pub use character_map::CharacterMap;
