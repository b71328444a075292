//! Engine configuration.

pub mod search_config;

pub use search_config::SearchConfig;
