//! Endpoint-annotated graph wrapper over petgraph.

use std::collections::BTreeMap;

use ccd_core::types::collections::{FxHashMap, FxHashSet};
use ccd_core::types::{Endpoint, Skeleton, Triple, VarId, VariableSet};
use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use super::types::EdgeMarks;

/// The mutable PAG: symmetric adjacency with independent endpoint marks,
/// plus the underline and dotted-underline triple sets.
///
/// Edges are only ever removed or reoriented after construction; a pair
/// non-adjacent in the skeleton stays non-adjacent for the whole run.
#[derive(Debug, Clone)]
pub struct Pag {
    graph: StableUnGraph<VarId, EdgeMarks>,
    index: FxHashMap<VarId, NodeIndex>,
    underlines: FxHashSet<Triple>,
    dotted_underlines: FxHashSet<Triple>,
}

impl Pag {
    /// Build a circle-circle-initialized PAG from an undirected skeleton.
    /// Duplicate and self-loop edges are ignored.
    pub fn from_skeleton(variables: &VariableSet, skeleton: &Skeleton) -> Self {
        let mut graph = StableUnGraph::default();
        let mut index = FxHashMap::default();
        for id in variables.ids() {
            index.insert(id, graph.add_node(id));
        }
        let mut pag = Self {
            graph,
            index,
            underlines: FxHashSet::default(),
            dotted_underlines: FxHashSet::default(),
        };
        for &(a, b) in skeleton.edges() {
            pag.add_nondirected_edge(a, b);
        }
        pag
    }

    fn idx(&self, v: VarId) -> Option<NodeIndex> {
        self.index.get(&v).copied()
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_adjacent(&self, a: VarId, b: VarId) -> bool {
        match (self.idx(a), self.idx(b)) {
            (Some(ai), Some(bi)) => self.graph.find_edge(ai, bi).is_some(),
            _ => false,
        }
    }

    /// Neighbors of `v` in ascending id order.
    pub fn adjacent(&self, v: VarId) -> Vec<VarId> {
        let Some(vi) = self.idx(v) else {
            return Vec::new();
        };
        let mut out: Vec<VarId> = self.graph.neighbors(vi).map(|n| self.graph[n]).collect();
        out.sort_unstable();
        out
    }

    pub fn degree(&self, v: VarId) -> usize {
        self.idx(v).map_or(0, |vi| self.graph.neighbors(vi).count())
    }

    /// All adjacent pairs as canonical `(low, high)` tuples, sorted.
    pub fn edges(&self) -> Vec<(VarId, VarId)> {
        let mut out: Vec<(VarId, VarId)> = self
            .graph
            .edge_weights()
            .map(|m| {
                if m.source <= m.target {
                    (m.source, m.target)
                } else {
                    (m.target, m.source)
                }
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// The mark proximal to `y` on the edge x--y, if the pair is adjacent.
    pub fn endpoint(&self, x: VarId, y: VarId) -> Option<Endpoint> {
        let e = self.graph.find_edge(self.idx(x)?, self.idx(y)?)?;
        self.graph.edge_weight(e).map(|m| m.at(y))
    }

    /// Set the mark proximal to `y` on the edge x--y. No-op if non-adjacent.
    pub fn set_endpoint(&mut self, x: VarId, y: VarId, mark: Endpoint) {
        let (Some(xi), Some(yi)) = (self.idx(x), self.idx(y)) else {
            return;
        };
        if let Some(e) = self.graph.find_edge(xi, yi) {
            if let Some(marks) = self.graph.edge_weight_mut(e) {
                marks.set_at(y, mark);
            }
        }
    }

    /// Both marks of the edge a--b as `(at_a, at_b)`.
    pub fn edge_marks(&self, a: VarId, b: VarId) -> Option<(Endpoint, Endpoint)> {
        let e = self.graph.find_edge(self.idx(a)?, self.idx(b)?)?;
        self.graph.edge_weight(e).map(|m| (m.at(a), m.at(b)))
    }

    pub fn set_edge_marks(&mut self, a: VarId, b: VarId, marks: (Endpoint, Endpoint)) {
        self.set_endpoint(b, a, marks.0);
        self.set_endpoint(a, b, marks.1);
    }

    /// Reorient a--b as the directed edge a --> b (tail at a, arrow at b).
    pub fn set_directed(&mut self, a: VarId, b: VarId) {
        self.set_edge_marks(a, b, (Endpoint::Tail, Endpoint::Arrow));
    }

    /// True if the edge a--b exists and carries circle marks on both ends.
    pub fn is_nondirected(&self, a: VarId, b: VarId) -> bool {
        self.edge_marks(a, b) == Some((Endpoint::Circle, Endpoint::Circle))
    }

    /// True if the edge source--dest is the directed edge source --> dest.
    pub fn points_towards(&self, source: VarId, dest: VarId) -> bool {
        self.edge_marks(source, dest) == Some((Endpoint::Tail, Endpoint::Arrow))
    }

    /// True if both edges of the triple carry arrows into the middle node.
    pub fn is_def_collider(&self, a: VarId, b: VarId, c: VarId) -> bool {
        self.endpoint(a, b) == Some(Endpoint::Arrow)
            && self.endpoint(c, b) == Some(Endpoint::Arrow)
    }

    pub fn add_nondirected_edge(&mut self, a: VarId, b: VarId) {
        if a == b || self.is_adjacent(a, b) {
            return;
        }
        let (Some(ai), Some(bi)) = (self.idx(a), self.idx(b)) else {
            return;
        };
        self.graph.add_edge(ai, bi, EdgeMarks::nondirected(a, b));
    }

    pub fn remove_edge(&mut self, a: VarId, b: VarId) {
        let (Some(ai), Some(bi)) = (self.idx(a), self.idx(b)) else {
            return;
        };
        if let Some(e) = self.graph.find_edge(ai, bi) {
            self.graph.remove_edge(e);
        }
    }

    /// Reset every mark to circle; run once before orientation begins.
    pub fn reorient_all_circle(&mut self) {
        for marks in self.graph.edge_weights_mut() {
            marks.at_source = Endpoint::Circle;
            marks.at_target = Endpoint::Circle;
        }
    }

    pub fn add_underline(&mut self, triple: Triple) {
        self.underlines.insert(triple);
    }

    pub fn is_underline(&self, a: VarId, b: VarId, c: VarId) -> bool {
        self.underlines.contains(&Triple::new(a, b, c))
    }

    pub fn underlines(&self) -> &FxHashSet<Triple> {
        &self.underlines
    }

    pub fn add_dotted_underline(&mut self, triple: Triple) {
        self.dotted_underlines.insert(triple);
    }

    pub fn is_dotted_underline(&self, a: VarId, b: VarId, c: VarId) -> bool {
        self.dotted_underlines.contains(&Triple::new(a, b, c))
    }

    /// Dotted-underline triples in canonical order, for deterministic
    /// iteration while the graph is mutated.
    pub fn dotted_underlines(&self) -> Vec<Triple> {
        let mut out: Vec<Triple> = self.dotted_underlines.iter().copied().collect();
        out.sort_unstable();
        out
    }

    fn edge_map(&self) -> BTreeMap<(VarId, VarId), (Endpoint, Endpoint)> {
        self.graph
            .edge_weights()
            .map(|m| {
                if m.source <= m.target {
                    ((m.source, m.target), (m.at_source, m.at_target))
                } else {
                    ((m.target, m.source), (m.at_target, m.at_source))
                }
            })
            .collect()
    }
}

impl PartialEq for Pag {
    fn eq(&self, other: &Self) -> bool {
        self.index.len() == other.index.len()
            && self.edge_map() == other.edge_map()
            && self.underlines == other.underlines
            && self.dotted_underlines == other.dotted_underlines
    }
}

impl Eq for Pag {}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(n: usize) -> VariableSet {
        VariableSet::new((0..n).map(|i| format!("X{i}")))
    }

    fn pag_from(edges: &[(u32, u32)], n: usize) -> Pag {
        let skeleton =
            Skeleton::from_edges(edges.iter().map(|&(a, b)| (VarId(a), VarId(b))));
        Pag::from_skeleton(&vars(n), &skeleton)
    }

    #[test]
    fn skeleton_edges_start_nondirected() {
        let pag = pag_from(&[(0, 1), (1, 2)], 3);
        assert!(pag.is_adjacent(VarId(0), VarId(1)));
        assert!(!pag.is_adjacent(VarId(0), VarId(2)));
        assert!(pag.is_nondirected(VarId(0), VarId(1)));
        assert_eq!(pag.endpoint(VarId(0), VarId(1)), Some(Endpoint::Circle));
    }

    #[test]
    fn endpoint_is_proximal_to_second_argument() {
        let mut pag = pag_from(&[(0, 1)], 2);
        pag.set_directed(VarId(0), VarId(1));
        assert_eq!(pag.endpoint(VarId(0), VarId(1)), Some(Endpoint::Arrow));
        assert_eq!(pag.endpoint(VarId(1), VarId(0)), Some(Endpoint::Tail));
        assert!(pag.points_towards(VarId(0), VarId(1)));
        assert!(!pag.points_towards(VarId(1), VarId(0)));
    }

    #[test]
    fn def_collider_requires_both_arrows() {
        let mut pag = pag_from(&[(0, 1), (2, 1)], 3);
        pag.set_directed(VarId(0), VarId(1));
        assert!(!pag.is_def_collider(VarId(0), VarId(1), VarId(2)));
        pag.set_directed(VarId(2), VarId(1));
        assert!(pag.is_def_collider(VarId(0), VarId(1), VarId(2)));
        assert!(pag.is_def_collider(VarId(2), VarId(1), VarId(0)));
    }

    #[test]
    fn underline_lookup_is_symmetric() {
        let mut pag = pag_from(&[(0, 1), (1, 2)], 3);
        pag.add_underline(Triple::new(VarId(0), VarId(1), VarId(2)));
        assert!(pag.is_underline(VarId(0), VarId(1), VarId(2)));
        assert!(pag.is_underline(VarId(2), VarId(1), VarId(0)));
        assert!(!pag.is_underline(VarId(1), VarId(0), VarId(2)));
    }

    #[test]
    fn removed_edge_stays_removed() {
        let mut pag = pag_from(&[(0, 1), (1, 2)], 3);
        pag.remove_edge(VarId(0), VarId(1));
        assert!(!pag.is_adjacent(VarId(0), VarId(1)));
        assert_eq!(pag.endpoint(VarId(0), VarId(1)), None);
        assert_eq!(pag.edges(), vec![(VarId(1), VarId(2))]);
    }

    #[test]
    fn duplicate_skeleton_edges_collapse() {
        let pag = pag_from(&[(0, 1), (1, 0), (0, 0)], 2);
        assert_eq!(pag.edges().len(), 1);
    }

    #[test]
    fn set_edge_marks_round_trips() {
        let mut pag = pag_from(&[(0, 1)], 2);
        pag.set_edge_marks(VarId(0), VarId(1), (Endpoint::Circle, Endpoint::Arrow));
        assert_eq!(
            pag.edge_marks(VarId(0), VarId(1)),
            Some((Endpoint::Circle, Endpoint::Arrow))
        );
        assert_eq!(
            pag.edge_marks(VarId(1), VarId(0)),
            Some((Endpoint::Arrow, Endpoint::Circle))
        );
    }

    #[test]
    fn equality_covers_marks_and_triples() {
        let mut a = pag_from(&[(0, 1), (1, 2)], 3);
        let mut b = a.clone();
        assert_eq!(a, b);
        a.set_directed(VarId(0), VarId(1));
        assert_ne!(a, b);
        b.set_directed(VarId(0), VarId(1));
        assert_eq!(a, b);
        a.add_underline(Triple::new(VarId(0), VarId(1), VarId(2)));
        assert_ne!(a, b);
    }
}
