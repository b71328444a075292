//! Undirected skeleton input from the external structure learner.

use serde::{Deserialize, Serialize};

use super::variable::VarId;

/// An undirected adjacency skeleton over the fixed variable set.
///
/// Produced by the external skeleton provider; the engine resets every
/// endpoint to circle before orientation begins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    edges: Vec<(VarId, VarId)>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VarId, VarId)>,
    {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    pub fn add_edge(&mut self, a: VarId, b: VarId) {
        self.edges.push((a, b));
    }

    pub fn edges(&self) -> &[(VarId, VarId)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
