//! bangumi-api crate
//!
//! Web server providing broadcast program search and iEPG export as HTTP API.
//!
//! ## Endpoints
//! - `GET /search` - Program Search
//! - `GET /program/{id}.tvpid` - iEPG Export (Shift_JIS)
//! - `GET /services`, `POST /services` - Channel Directory
//! - `POST /programs` - Program Ingest
//! - `GET /excluded-services`, `PUT|DELETE /excluded-services/{id}` - Excluded Channels
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl 'http://127.0.0.1:5530/search?q=%E3%83%89%E3%83%A9%E3%83%9E%20-%E5%86%8D&channelType=1'
//! curl -o program.tvpid http://127.0.0.1:5530/program/12345.tvpid
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{SearchParams, SearchRequest, SearchResponse};
pub use service::BangumiApiServiceFull;
