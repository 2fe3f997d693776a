//! ルーター定義

use axum::{
  Router,
  routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use super::handlers::{
  delete_excluded_service, get_excluded_services, get_program_iepg, get_search, get_services,
  health_check, post_programs, post_services, put_excluded_service,
};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health_check))
    .route("/search", get(get_search))
    .route("/program/{file}", get(get_program_iepg))
    .route("/services", get(get_services).post(post_services))
    .route("/programs", post(post_programs))
    .route("/excluded-services", get(get_excluded_services))
    .route(
      "/excluded-services/{id}",
      put(put_excluded_service).delete(delete_excluded_service),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
