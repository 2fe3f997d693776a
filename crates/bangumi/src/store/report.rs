//! 番組取り込み結果のレポート型定義
//!
//! バッチ取り込み時の新規・更新件数を集計する型を定義します。

use serde::{Deserialize, Serialize};

/// `upsert` の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
  /// 入力バッチの番組総数
  pub total: usize,
  /// 新規に追加された件数
  pub inserted: usize,
  /// 既存レコードを置き換えた件数
  pub updated: usize,
}

impl IngestReport {
  /// 全て新規追加だったか（updated == 0）
  pub fn is_all_inserted(&self) -> bool {
    self.updated == 0
  }

  /// 新規追加を記録
  pub fn record_inserted(&mut self) {
    self.total += 1;
    self.inserted += 1;
  }

  /// 更新を記録
  pub fn record_updated(&mut self) {
    self.total += 1;
    self.updated += 1;
  }
}
