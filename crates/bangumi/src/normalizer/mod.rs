//! normalizer module

pub mod canonical;

/// Re-exports
pub use canonical::{canonicalize, fold_width};
