//! Background-knowledge constraints.

use crate::types::VarId;

/// Opaque validator restricting which orientations are legal.
///
/// Consulted before every directed-edge orientation; a forbidden
/// orientation is skipped, never applied.
pub trait Knowledge {
    /// True if the directed orientation `from -> to` must not be made.
    fn forbids(&self, from: VarId, to: VarId) -> bool;
}

/// Permissive default used when no constraints are supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKnowledge;

impl Knowledge for NoKnowledge {
    fn forbids(&self, _from: VarId, _to: VarId) -> bool {
        false
    }
}
