//! iEPG 出力
//!
//! 1番組分の予約情報を iEPG（TVPI）形式で出力する。
//! 文書は CRLF 改行で組み立て、表示用サニタイズ後に Shift_JIS へエンコードする。

pub mod document;

pub use document::{IEPG_CONTENT_TYPE, IepgDocument, IepgOptions, render};
