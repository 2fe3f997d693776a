//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Path, Query, State},
  http::header,
  response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use bangumi::iepg::IEPG_CONTENT_TYPE;
use bangumi::models::{Program, Service};

use crate::errors::ApiError;
use crate::models::{
  ExcludedServicesResponse, ExclusionResponse, IngestResponse, SearchParams, SearchResponse,
  ServicesResponse, UpsertServicesResponse, parse_id,
};

use super::state::AppState;

/// iEPG ファイルの拡張子
const TVPID_SUFFIX: &str = ".tvpid";

/// GET /search エンドポイント
///
/// 番組を検索する。
///
/// # Query Parameters
/// - `q`: 検索クエリ（`"フレーズ"`, `-除外語` に対応）
/// - `serviceId`, `startFrom`, `startTo`: 数値
/// - `channelType`: 1（地上波）, 2（BS）, 3（CS）
///
/// # Response
/// - 200 OK: 検索成功
/// - 400 Bad Request: 入力エラー（数値でないパラメーター、クエリ長超過）
pub async fn get_search(
  State(state): State<AppState>,
  Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
  let request = params.into_request()?;
  debug!(query_len = request.query.len(), filters = ?request.filters, "検索リクエストを受信");

  // 全件走査は CPU バウンドなため spawn_blocking で実行
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.search(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(count = response.count, elapsed_ms = response.elapsed_ms, "検索完了");

  Ok(Json(response))
}

/// GET /program/{id}.tvpid エンドポイント
///
/// 1番組分の iEPG 文書を Shift_JIS で返す。
///
/// # Response
/// - 200 OK: `application/x-tv-program-digital-info; charset=shift_jis`
/// - 400 Bad Request: 番組IDが数値でない
/// - 404 Not Found: 番組が存在しない
pub async fn get_program_iepg(
  State(state): State<AppState>,
  Path(file): Path<String>,
) -> Result<Response, ApiError> {
  let id_str = file.strip_suffix(TVPID_SUFFIX).unwrap_or(file.as_str());
  let program_id = parse_id("program id", id_str)?;
  debug!(program_id, "iEPG リクエストを受信");

  let service = state.service.clone();

  let bytes =
    tokio::task::spawn_blocking(move || service.export_iepg(program_id)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(program_id, bytes = bytes.len(), "iEPG 出力完了");

  Ok(([(header::CONTENT_TYPE, IEPG_CONTENT_TYPE)], bytes).into_response())
}

/// GET /services エンドポイント
pub async fn get_services(State(state): State<AppState>) -> Result<Json<ServicesResponse>, ApiError> {
  let response = state.service.services()?;
  debug!(count = response.services.len(), "サービス一覧を返却");
  Ok(Json(response))
}

/// POST /programs エンドポイント
///
/// 番組を一括登録する（ID が同じ番組は置き換え）。
pub async fn post_programs(
  State(state): State<AppState>,
  Json(programs): Json<Vec<Program>>,
) -> Result<Json<IngestResponse>, ApiError> {
  debug!(count = programs.len(), "番組登録リクエストを受信");

  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.ingest_programs(programs)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    total = response.total,
    inserted = response.inserted,
    updated = response.updated,
    "番組登録完了"
  );

  Ok(Json(response))
}

/// POST /services エンドポイント
pub async fn post_services(
  State(state): State<AppState>,
  Json(services): Json<Vec<Service>>,
) -> Result<Json<UpsertServicesResponse>, ApiError> {
  let response = state.service.upsert_services(services)?;
  info!(upserted = response.upserted, "サービス登録完了");
  Ok(Json(response))
}

/// GET /excluded-services エンドポイント
pub async fn get_excluded_services(
  State(state): State<AppState>,
) -> Result<Json<ExcludedServicesResponse>, ApiError> {
  Ok(Json(state.service.excluded_services()?))
}

/// PUT /excluded-services/{id} エンドポイント
pub async fn put_excluded_service(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<ExclusionResponse>, ApiError> {
  let service_id = parse_id("service id", &id)?;
  Ok(Json(state.service.exclude_service(service_id)?))
}

/// DELETE /excluded-services/{id} エンドポイント
pub async fn delete_excluded_service(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<ExclusionResponse>, ApiError> {
  let service_id = parse_id("service id", &id)?;
  Ok(Json(state.service.include_service(service_id)?))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
