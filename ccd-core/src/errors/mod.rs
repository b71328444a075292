//! Error handling for the CCD engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod search_error;

pub use config_error::ConfigError;
pub use error_code::CcdErrorCode;
pub use search_error::SearchError;
