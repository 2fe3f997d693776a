// crates/bangumi/src/service.rs

//! BangumiService: bangumi クレートの統合ファサード。
//!
//! - 番組ストア (ProgramStore)
//! - チャンネルディレクトリ (ChannelDirectory)
//! - 表示用サニタイザー (DisplaySanitizer)
//! - iEPG 出力
//!
//! HTTP サーバーなどの外部からは、この構造体だけを意識すればよい。

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::BangumiConfig;
use crate::errors::{BangumiResult, ExportError};
use crate::iepg::{self, IepgDocument, IepgOptions};
use crate::models::{Program, ProgramListing, ProgramRecord, Service};
use crate::query::{ProgramPredicate, SearchFilters, parse_query};
use crate::sanitizer::DisplaySanitizer;
use crate::store::{
  ChannelDirectory, InMemoryProgramStore, IngestReport, ProgramStore, SeedData, ServiceListing,
};

/// bangumi クレートの統合ファサード。
///
/// 検索は「クエリ解析 → 述語構築 → ストア評価」の順に行う。
/// 除外チャンネルはディレクトリが保持し、検索のたびに述語へ反映する。
pub struct BangumiService {
  /// 番組ストア
  store: Arc<dyn ProgramStore>,

  /// チャンネルディレクトリ + 除外チャンネル
  directory: ChannelDirectory,

  /// 表示用サニタイザー
  sanitizer: DisplaySanitizer,

  /// iEPG 出力オプション
  iepg_options: IepgOptions,
}

impl std::fmt::Debug for BangumiService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BangumiService")
      .field("programs", &self.store.len())
      .field("directory", &self.directory)
      .field("iepg_options", &self.iepg_options)
      .finish_non_exhaustive()
  }
}

impl BangumiService {
  /// 初期化（設定検証 + インメモリストア構築 + シード読み込み）
  ///
  /// # エラー
  /// - 設定が不正
  /// - シードファイルの読み込み・解析に失敗
  pub fn init(config: &BangumiConfig) -> BangumiResult<Self> {
    Self::with_store(config, Arc::new(InMemoryProgramStore::new()))
  }

  /// 任意のストアで初期化する。
  pub fn with_store(config: &BangumiConfig, store: Arc<dyn ProgramStore>) -> BangumiResult<Self> {
    // 設定の妥当性を検証（ConfigError は #[from] で BangumiError に自動変換）
    config.validate()?;

    let service = Self {
      store,
      directory: ChannelDirectory::new(),
      sanitizer: DisplaySanitizer::default(),
      iepg_options: config.iepg_options()?,
    };

    if let Some(path) = config.seed_file() {
      let seed = SeedData::load(path)?;
      service.apply_seed(seed);
    }

    info!(programs = service.store.len(), "BangumiService initialized");

    Ok(service)
  }

  /// シードデータを反映する。
  pub fn apply_seed(&self, seed: SeedData) -> IngestReport {
    self.directory.upsert_services(seed.services);
    for service_id in seed.excluded_services {
      self.directory.exclude(service_id);
    }
    self.store.upsert(seed.programs)
  }

  // ===== 取り込み =====

  /// 番組を取り込む（ID が同じ番組は置き換え）。
  pub fn ingest_programs(&self, programs: Vec<Program>) -> IngestReport {
    let report = self.store.upsert(programs);
    info!(
      total = report.total,
      inserted = report.inserted,
      updated = report.updated,
      "Programs ingested"
    );
    report
  }

  /// サービスを登録する（ID が同じサービスは置き換え）。
  pub fn upsert_services(&self, services: Vec<Service>) -> usize {
    self.directory.upsert_services(services)
  }

  // ===== 検索 =====

  /// 検索述語を構築する。
  ///
  /// `filters.excluded_channels` にはディレクトリの除外チャンネルが追加される。
  pub fn build_predicate(&self, query: &str, filters: &SearchFilters) -> ProgramPredicate {
    let parsed = parse_query(query);

    let mut filters = filters.clone();
    filters.excluded_channels.extend(self.directory.excluded());

    ProgramPredicate::build(&parsed, &filters, &self.directory.services())
  }

  /// 番組を検索する。結果は開始時刻の昇順。
  pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<ProgramRecord> {
    let predicate = self.build_predicate(query, filters);
    let records = self.store.query(&predicate);

    debug!(query, hits = records.len(), "Search finished");

    records
  }

  /// 表示用の検索結果。
  ///
  /// タイトル・概要の外字と絵文字を置換し、ディレクトリにある放送局の情報を付与する。
  pub fn search_for_display(&self, query: &str, filters: &SearchFilters) -> Vec<ProgramListing> {
    self
      .search(query, filters)
      .into_iter()
      .map(|record| {
        let mut program = record.into_program();
        program.name = self.sanitizer.normalize_special(&program.name);
        program.description = self.sanitizer.normalize_special(&program.description);

        let service = self.directory.service(program.service_id);
        ProgramListing::new(program, service.as_ref())
      })
      .collect()
  }

  // ===== 出力 =====

  /// 1番組分の iEPG 文書を生成する。
  ///
  /// # エラー
  /// - 番組が存在しない
  /// - 開始時刻が不正
  pub fn export_iepg(&self, program_id: i64) -> BangumiResult<IepgDocument> {
    let record = self
      .store
      .get(program_id)
      .ok_or(ExportError::ProgramNotFound { program_id })?;

    let program = record.program();
    let service = self.directory.service(program.service_id);
    let document = iepg::render(program, service.as_ref(), &self.iepg_options, &self.sanitizer)?;

    info!(program_id, "iEPG document exported");

    Ok(document)
  }

  /// iEPG 文書を Shift_JIS バイト列で返す。
  pub fn export_iepg_bytes(&self, program_id: i64) -> BangumiResult<Vec<u8>> {
    Ok(self.export_iepg(program_id)?.to_shift_jis()?)
  }

  // ===== チャンネル =====

  /// 表示用のサービス一覧
  pub fn services(&self) -> Vec<ServiceListing> {
    self.directory.listing()
  }

  /// サービスを検索対象から除外する。
  pub fn exclude_service(&self, service_id: i64) -> bool {
    self.directory.exclude(service_id)
  }

  /// サービスを検索対象に戻す。
  pub fn include_service(&self, service_id: i64) -> bool {
    self.directory.include(service_id)
  }

  /// 除外中のサービスID
  pub fn excluded_services(&self) -> BTreeSet<i64> {
    self.directory.excluded()
  }

  // ===== アクセサ =====

  /// 番組ストアへの参照を返す。
  pub fn store(&self) -> &dyn ProgramStore {
    self.store.as_ref()
  }

  /// チャンネルディレクトリへの参照を返す。
  pub fn directory(&self) -> &ChannelDirectory {
    &self.directory
  }

  /// サニタイザーへの参照を返す。
  pub fn sanitizer(&self) -> &DisplaySanitizer {
    &self.sanitizer
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{BangumiError, ConfigError};
  use crate::models::ChannelCategory;

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  fn create_service() -> BangumiService {
    let service = BangumiService::init(&BangumiConfig::default()).expect("初期化失敗");
    service.upsert_services(vec![
      Service::new(1024, "NHK総合", 1).with_remote_control_key(1),
      Service::new(1032, "NHK Eテレ", 1).with_remote_control_key(2),
      Service::new(101, "NHK BS", 2),
    ]);
    service.ingest_programs(vec![
      Program::new(1, 1024, 3_000, 60_000, "ニュース7", "今日の出来事"),
      Program::new(2, 1032, 1_000, 60_000, "きょうの料理", "簡単レシピ"),
      Program::new(3, 101, 2_000, 60_000, "BSニュース", "世界の出来事"),
      Program::new(4, 1024, 4_000, 60_000, "🈚料ニュース", ""),
    ]);
    service
  }

  fn ids(records: &[ProgramRecord]) -> Vec<i64> {
    records.iter().map(ProgramRecord::id).collect()
  }

  // ─── 初期化テスト ──────────────────────────────────────────────────────────

  #[test]
  fn init_rejects_invalid_config() {
    let mut config = BangumiConfig::default();
    config.search.max_query_bytes = 0;

    let err = BangumiService::init(&config).unwrap_err();
    assert!(matches!(
      err,
      BangumiError::Config(ConfigError::InvalidMaxQueryBytes { .. })
    ));
  }

  // ─── 検索テスト ────────────────────────────────────────────────────────────

  #[test]
  fn search_orders_by_start_time() {
    let service = create_service();
    let hits = service.search("ニュース", &SearchFilters::default());
    assert_eq!(ids(&hits), vec![3, 1, 4]);
  }

  #[test]
  fn search_applies_directory_exclusions() {
    let service = create_service();
    service.exclude_service(101);

    let hits = service.search("ニュース", &SearchFilters::default());
    assert_eq!(ids(&hits), vec![1, 4]);

    service.include_service(101);
    let hits = service.search("ニュース", &SearchFilters::default());
    assert_eq!(ids(&hits), vec![3, 1, 4]);
  }

  #[test]
  fn search_by_category() {
    let service = create_service();
    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Bs),
      ..Default::default()
    };
    assert_eq!(ids(&service.search("", &filters)), vec![3]);

    let filters = SearchFilters {
      channel_category: Some(ChannelCategory::Cs),
      ..Default::default()
    };
    assert!(service.search("", &filters).is_empty());
  }

  #[test]
  fn search_for_display_normalizes_special_characters() {
    let service = create_service();
    let listings = service.search_for_display("料", &SearchFilters::default());

    let names: Vec<&str> = listings.iter().map(|l| l.program.name.as_str()).collect();
    assert_eq!(names, vec!["きょうの料理", "[無]料ニュース"]);
  }

  #[test]
  fn search_for_display_attaches_station_details() {
    let service = create_service();
    service.ingest_programs(vec![Program::new(5, 9999, 5_000, 60_000, "謎のニュース", "")]);

    let listings = service.search_for_display("ニュース", &SearchFilters::default());
    let stations: Vec<Option<(&str, &str)>> = listings
      .iter()
      .map(|l| l.station.as_ref().map(|s| (s.station_id.as_str(), s.station_name.as_str())))
      .collect();

    assert_eq!(
      stations,
      vec![
        Some(("0101", "NHK BS")),
        Some(("0001", "NHK総合")),
        Some(("0001", "NHK総合")),
        None,
      ]
    );
  }

  // ─── 出力テスト ────────────────────────────────────────────────────────────

  #[test]
  fn export_known_program() {
    let service = create_service();
    let document = service.export_iepg(1).unwrap();

    assert!(document.text().contains("station: NHK総合\r\n"));
    assert!(document.text().contains("station-id: 0001\r\n"));
    assert!(!service.export_iepg_bytes(1).unwrap().is_empty());
  }

  #[test]
  fn export_unknown_program() {
    let service = create_service();
    let err = service.export_iepg(999).unwrap_err();
    assert!(matches!(
      err,
      BangumiError::Export(ExportError::ProgramNotFound { program_id: 999 })
    ));
  }

  // ─── チャンネルテスト ──────────────────────────────────────────────────────

  #[test]
  fn services_report_exclusion() {
    let service = create_service();
    service.exclude_service(1032);

    let listing = service.services();
    assert_eq!(listing.len(), 3);
    assert!(listing.iter().any(|e| e.service.service_id == 1032 && e.excluded));
    assert_eq!(service.excluded_services(), BTreeSet::from([1032]));
  }
}
