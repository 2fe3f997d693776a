//! bangumi 番組検索ライブラリー
//!
//! 番組表テキストの正規化・検索クエリ解析・表示用サニタイズを行う

/// 文字置換テーブルモジュール - 外字・絵文字の置換表 (CharacterMap) を定義
pub mod charmap;

/// 設定モジュール - BangumiConfig, LogLevel等の設定構造体を定義
pub mod config;

/// エラーモジュール - BangumiError, BangumiResult等のエラー型を定義
pub mod errors;

/// iEPG モジュール - 予約用 iEPG 文書の生成と Shift_JIS エンコード
pub mod iepg;

/// ロギングモジュール - tracing-subscriber の初期化
pub mod logging;

/// データモデルモジュール - Program, Service等のデータ構造を定義
pub mod models;

/// 正規化モジュール - 検索用の表記ゆれ吸収 (canonicalize)
pub mod normalizer;

/// クエリモジュール - 検索クエリの解析と検索述語の構築
pub mod query;

/// サニタイザーモジュール - Shift_JIS 表示先向けの文字置換
pub mod sanitizer;

/// サービスモジュール - BangumiService等の上位レベルAPIを提供
pub mod service;

/// ストアモジュール - 番組レコードストアとチャンネルディレクトリ
pub mod store;

/// 再エクスポート
pub use config::{BangumiConfig, LogLevel};
pub use errors::{BangumiError, BangumiResult};
pub use normalizer::canonicalize;
pub use query::{ParsedQuery, ProgramPredicate, SearchFilters, SearchTerm, parse_query};
pub use sanitizer::{DisplaySanitizer, sanitize_for_display};
pub use service::BangumiService;
