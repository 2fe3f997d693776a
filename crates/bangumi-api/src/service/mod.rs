//! Service module

mod bangumi_api_service;

pub use bangumi_api_service::{BangumiApiService, BangumiApiServiceFull};
