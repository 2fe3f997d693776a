//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_UTC_OFFSET_HOURS, MAX_QUERY_LENGTH,
};
pub use env::Config;
