//! Search-time errors.

use super::config_error::ConfigError;
use super::error_code::{self, CcdErrorCode};
use crate::types::{Triple, VarId};

/// Errors ending a search run.
///
/// `NoMinimizingSet`, `MissingSepset`, and `MissingSuperSepset` are
/// internal-consistency failures: they indicate a defective oracle or
/// skeleton and abort the whole search. `InconsistentModel` signals that
/// no valid PAG exists for the supplied independence oracle.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No minimizing conditioning set for triple {triple}; defective oracle or skeleton")]
    NoMinimizingSet { triple: Triple },

    #[error("No separating set recorded for non-adjacent pair ({x}, {y}) of collider {triple}")]
    MissingSepset { triple: Triple, x: VarId, y: VarId },

    #[error("Dotted-underline triple {triple} has no SuperSepset entry")]
    MissingSuperSepset { triple: Triple },

    #[error(
        "Independence model inconsistent: orienting {b} -> {d} for {triple} \
         would create an unvetted collider"
    )]
    InconsistentModel { triple: Triple, b: VarId, d: VarId },
}

impl CcdErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::NoMinimizingSet { .. } => error_code::NO_MINIMIZING_SET,
            Self::MissingSepset { .. } => error_code::MISSING_SEPSET,
            Self::MissingSuperSepset { .. } => error_code::MISSING_SUPERSEPSET,
            Self::InconsistentModel { .. } => error_code::INCONSISTENT_MODEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let e = SearchError::InconsistentModel {
            triple: Triple::new(VarId(0), VarId(1), VarId(2)),
            b: VarId(1),
            d: VarId(3),
        };
        assert_eq!(e.error_code(), error_code::INCONSISTENT_MODEL);
        let e: SearchError = ConfigError::EmptyVariableSet.into();
        assert_eq!(e.error_code(), error_code::CONFIG_ERROR);
    }
}
