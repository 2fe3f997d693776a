//! bangumi-api サーバーエントリーポイント

use std::sync::Arc;

use bangumi_api::ApiError;
use bangumi_api::api::AppState;
use bangumi_api::api::run_server;
use bangumi_api::config::Config;
use bangumi_api::service::BangumiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG が優先）
  bangumi::logging::init_tracing(config.log_level);
  tracing::info!(
    seed_file = ?config.seed_file,
    utc_offset_hours = config.utc_offset_hours,
    "設定を読み込みました"
  );

  // サービスの初期化
  let service = Arc::new(BangumiApiServiceFull::new(&config)?);
  tracing::info!("番組検索サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
