//! query module
//!
//! 検索クエリ文字列の解析と、番組レコードに対する述語の構築。

pub mod parser;
pub mod predicate;

/// Re-exports
pub use parser::{ParsedQuery, SearchTerm, parse_query};
pub use predicate::{ChannelConstraint, ProgramPredicate, SearchFilters};
