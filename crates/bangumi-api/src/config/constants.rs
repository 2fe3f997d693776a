//! API設定の定数定義

/// 検索クエリの最大長（バイト単位）
///
/// 長大なクエリによる全件走査の多重化を防ぐための制限。
pub const MAX_QUERY_LENGTH: usize = 1024;

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// デフォルトの UTC オフセット（時間）
///
/// iEPG の日時は日本標準時 (JST, +09:00) で出力する。
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";
