//! PAG edge data.

use ccd_core::types::{Endpoint, VarId};
use serde::{Deserialize, Serialize};

/// Endpoint pair carried by one PAG edge.
///
/// `source` and `target` follow the stored edge orientation; each mark is
/// proximal to its node. Adjacency is symmetric, the marks are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMarks {
    pub source: VarId,
    pub target: VarId,
    pub at_source: Endpoint,
    pub at_target: Endpoint,
}

impl EdgeMarks {
    /// A fully unoriented (circle-circle) edge.
    pub fn nondirected(source: VarId, target: VarId) -> Self {
        Self {
            source,
            target,
            at_source: Endpoint::Circle,
            at_target: Endpoint::Circle,
        }
    }

    /// The mark proximal to `node`, which must be one of the two ends.
    pub fn at(&self, node: VarId) -> Endpoint {
        debug_assert!(node == self.source || node == self.target);
        if node == self.source {
            self.at_source
        } else {
            self.at_target
        }
    }

    pub fn set_at(&mut self, node: VarId, mark: Endpoint) {
        debug_assert!(node == self.source || node == self.target);
        if node == self.source {
            self.at_source = mark;
        } else {
            self.at_target = mark;
        }
    }
}
