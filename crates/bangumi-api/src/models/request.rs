//! リクエストモデル定義

use std::str::FromStr;

use serde::Deserialize;

use bangumi::models::ChannelCategory;
use bangumi::query::SearchFilters;

use crate::errors::{ApiError, Result};

/// GET /search のクエリパラメーター
///
/// 数値も文字列のまま受け取り、検証は [`SearchParams::into_request`] で行う。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
  /// 検索クエリ
  #[serde(default)]
  pub q: Option<String>,
  /// サービスID
  #[serde(default)]
  pub service_id: Option<String>,
  /// 開始時刻の下限（エポックミリ秒）
  #[serde(default)]
  pub start_from: Option<String>,
  /// 開始時刻の上限（エポックミリ秒）
  #[serde(default)]
  pub start_to: Option<String>,
  /// 放送種別 (1: 地上波, 2: BS, 3: CS)
  #[serde(default)]
  pub channel_type: Option<String>,
}

/// 検証済みの検索リクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
  /// 検索クエリ
  pub query: String,
  /// 非テキスト条件
  pub filters: SearchFilters,
}

impl SearchParams {
  /// 数値パラメーターを検証して [`SearchRequest`] に変換する。
  ///
  /// 空文字列のパラメーターは未指定として扱う。
  ///
  /// # Errors
  /// - 数値でないパラメーター
  /// - channelType が 1〜3 以外
  pub fn into_request(self) -> Result<SearchRequest> {
    let channel_category = match parse_param::<u16>("channelType", self.channel_type)? {
      Some(code) => Some(ChannelCategory::try_from(code).map_err(ApiError::invalid_input)?),
      None => None,
    };

    let filters = SearchFilters {
      channel_id: parse_param("serviceId", self.service_id)?,
      start_from: parse_param("startFrom", self.start_from)?,
      start_to: parse_param("startTo", self.start_to)?,
      channel_category,
      ..Default::default()
    };

    Ok(SearchRequest {
      query: self.q.unwrap_or_default(),
      filters,
    })
  }
}

/// 数値パラメーターを解析する。
fn parse_param<T: FromStr>(name: &str, value: Option<String>) -> Result<Option<T>> {
  match value.as_deref().map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => s
      .parse::<T>()
      .map(Some)
      .map_err(|_| ApiError::invalid_input(format!("{name} must be an integer: {s}"))),
  }
}

/// パスパラメーターの ID を解析する。
///
/// # Errors
/// 数値でない場合
pub fn parse_id(name: &str, value: &str) -> Result<i64> {
  value
    .trim()
    .parse::<i64>()
    .map_err(|_| ApiError::invalid_input(format!("{name} must be an integer: {value}")))
}
