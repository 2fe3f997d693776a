//! モデルモジュール

mod request;
mod response;

pub use request::{SearchParams, SearchRequest, parse_id};
pub use response::{
  ExcludedServicesResponse, ExclusionResponse, IngestResponse, SearchResponse, ServicesResponse,
  UpsertServicesResponse,
};
