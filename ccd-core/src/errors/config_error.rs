//! Configuration-time precondition errors.

use super::error_code::{self, CcdErrorCode};
use crate::types::VarId;

/// Precondition violations reported at engine construction, before any
/// search work begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Variable set is empty")]
    EmptyVariableSet,

    #[error("Skeleton edge references unknown variable {0}")]
    UnknownVariable(VarId),

    #[error("Skeleton contains a self loop at {0}")]
    SelfLoop(VarId),
}

impl CcdErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
