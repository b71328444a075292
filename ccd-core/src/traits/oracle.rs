//! The conditional-independence oracle seam.

use crate::types::VarId;

/// Outcome of one scored conditional-independence test.
#[derive(Debug, Clone, Copy)]
pub struct IndependenceResult {
    /// Whether x is independent of y given the conditioning set.
    pub independent: bool,
    /// Comparable score for the test; lower marks a better separator
    /// candidate during minimal-score search.
    pub score: f64,
}

/// Conditional-independence oracle over the fixed variable set.
///
/// All statistical semantics (significance threshold, scoring function)
/// live behind this seam. `Sync` because the collider scan queries the
/// oracle from rayon workers.
pub trait IndependenceOracle: Sync {
    /// Test `x ⫫ y | z` and report the test's score.
    fn test(&self, x: VarId, y: VarId, z: &[VarId]) -> IndependenceResult;

    /// The independence decision alone.
    fn is_independent(&self, x: VarId, y: VarId, z: &[VarId]) -> bool {
        self.test(x, y, z).independent
    }
}
