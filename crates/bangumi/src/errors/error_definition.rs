//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（BangumiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// search.max_query_bytes < 1
  #[error("search.max_query_bytes は 1 以上である必要があります: actual={actual}")]
  InvalidMaxQueryBytes {
    /// 実際に指定された値
    actual: usize,
  },

  /// export.utc_offset_hours が許容範囲外
  #[error("export.utc_offset_hours は {min}〜{max} の範囲で指定してください: actual={actual}")]
  InvalidUtcOffset {
    /// 許容される最小値
    min: i32,
    /// 許容される最大値
    max: i32,
    /// 実際に指定された値
    actual: i32,
  },

  /// export.unknown_station_name が空
  #[error("export.unknown_station_name に空文字列は指定できません")]
  EmptyUnknownStationName,

  /// store.seed_file が「存在するファイル」でない
  #[error("store.seed_file がファイルではありません: path={path:?}")]
  InvalidSeedFile {
    /// 不正なパス
    path: PathBuf,
  },
}

/// 番組ストア関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StoreError {
  /// シードファイルの読み込みに失敗
  #[error("シードファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  SeedRead {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// シードファイルの JSON が不正
  #[error("シードファイルの解析に失敗しました: path={path:?}, error={source}")]
  SeedParse {
    /// 対象パス
    path: PathBuf,
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// iEPG 出力関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ExportError {
  /// 番組が見つからない
  #[error("番組が見つかりません: program_id={program_id}")]
  ProgramNotFound {
    /// 指定された番組ID
    program_id: i64,
  },

  /// 開始時刻を日時に変換できない
  #[error("開始時刻が不正です: program_id={program_id}, start_at={start_at}")]
  InvalidStartTime {
    /// 対象番組ID
    program_id: i64,
    /// エポックミリ秒
    start_at: i64,
  },

  /// サニタイズ後の文書が Shift_JIS でエンコードできない
  ///
  /// サニタイザーの分類漏れでのみ発生する。
  #[error("Shift_JIS でエンコードできない文字が残っています: program_id={program_id}")]
  Unencodable {
    /// 対象番組ID
    program_id: i64,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `BangumiResult<T>` = `Result<T, BangumiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BangumiError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// ストア関連エラー
  #[error(transparent)]
  Store(#[from] StoreError),

  /// iEPG 出力エラー
  #[error(transparent)]
  Export(#[from] ExportError),
}

/// bangumi クレートの標準 Result 型エイリアス
pub type BangumiResult<T> = Result<T, BangumiError>;
