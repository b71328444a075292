//! The separating-set producer seam.

use crate::types::VarId;

/// Supplies separating sets discovered during skeleton construction and
/// answers independence queries against derived sets.
pub trait SepsetOracle {
    /// A conditioning set rendering x and y independent, if one is known.
    fn sepset(&self, x: VarId, y: VarId) -> Option<Vec<VarId>>;

    /// Is `x ⫫ y | z`, per the oracle's test semantics.
    fn is_independent(&self, x: VarId, y: VarId, z: &[VarId]) -> bool;
}
