//! Symmetric triple keys for underline bookkeeping.

use serde::{Deserialize, Serialize};

use super::variable::VarId;

/// An unshielded-triple key `<x, y, z>` with `y` the middle node.
///
/// `(x, y, z)` and `(z, y, x)` denote the same triple; construction
/// canonicalizes `x <= z` so the derived `Eq`/`Hash`/`Ord` are symmetric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Triple {
    x: VarId,
    y: VarId,
    z: VarId,
}

impl Triple {
    pub fn new(x: VarId, y: VarId, z: VarId) -> Self {
        if z < x {
            Self { x: z, y, z: x }
        } else {
            Self { x, y, z }
        }
    }

    /// The canonical first outer node.
    pub fn x(&self) -> VarId {
        self.x
    }

    /// The middle node.
    pub fn y(&self) -> VarId {
        self.y
    }

    /// The canonical second outer node.
    pub fn z(&self) -> VarId {
        self.z
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_triples_are_equal() {
        let a = Triple::new(VarId(5), VarId(1), VarId(2));
        let b = Triple::new(VarId(2), VarId(1), VarId(5));
        assert_eq!(a, b);
        assert_eq!(a.x(), VarId(2));
        assert_eq!(a.z(), VarId(5));
    }

    #[test]
    fn middle_node_distinguishes() {
        let a = Triple::new(VarId(0), VarId(1), VarId(2));
        let b = Triple::new(VarId(0), VarId(3), VarId(2));
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_canonical() {
        let mut triples = vec![
            Triple::new(VarId(0), VarId(3), VarId(2)),
            Triple::new(VarId(2), VarId(1), VarId(0)),
        ];
        triples.sort();
        assert_eq!(triples[0], Triple::new(VarId(0), VarId(1), VarId(2)));
    }
}
