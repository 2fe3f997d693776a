//! store モジュール
//!
//! 番組レコードストアとチャンネルディレクトリを提供します。
//! 検索述語の評価はストア側で行い、結果は開始時刻の昇順で返します。

pub mod channel_directory;
pub mod memory_store;
pub mod program_store;
pub mod report;
pub mod seed;

/// 主要な型を再エクスポート
pub use channel_directory::{ChannelDirectory, ServiceListing};
pub use memory_store::InMemoryProgramStore;
pub use program_store::ProgramStore;
pub use report::IngestReport;
pub use seed::SeedData;
