//! Rule R1: recursive speculative endpoint propagation.
//!
//! Whenever an edge a -> b is oriented, underline-triple chains through b
//! are traversed, orienting further edges. A visited set keyed by the
//! directed (b, c) pair bounds the recursion; cyclic underline chains
//! terminate at the first revisit.

use ccd_core::types::collections::FxHashSet;
use ccd_core::types::VarId;
use tracing::trace;

use super::SearchRun;

impl SearchRun<'_> {
    /// Seed a propagation pass from every already-directed edge.
    pub(crate) fn initial_r1_sweep(&mut self) {
        for (x, y) in self.pag.edges() {
            if self.pag.points_towards(x, y) {
                self.propagate_r1(x, y);
            } else if self.pag.points_towards(y, x) {
                self.propagate_r1(y, x);
            }
        }
    }

    /// R1 entry: the edge a -> b was just oriented; try to extend the
    /// orientation through underline chains at b.
    pub(crate) fn propagate_r1(&mut self, a: VarId, b: VarId) {
        if !self.apply_r1 {
            return;
        }
        let mut visited = FxHashSet::default();
        for c in self.pag.adjacent(b) {
            if c == a {
                continue;
            }
            self.r1_visit(a, b, c, &mut visited);
        }
    }

    /// Attempt to orient b -> c and continue the chain through c.
    /// Returns false when the triple does not admit propagation.
    fn r1_visit(
        &mut self,
        a: VarId,
        b: VarId,
        c: VarId,
        visited: &mut FxHashSet<(VarId, VarId)>,
    ) -> bool {
        if !self.pag.is_nondirected(b, c) {
            return false;
        }
        if !self.pag.is_underline(a, b, c) {
            return false;
        }
        if self.forbidden(b, c) {
            return false;
        }
        if !visited.insert((b, c)) {
            return false;
        }

        trace!(%a, %b, %c, "R1 orienting");
        self.pag.set_directed(b, c);

        for d in self.pag.adjacent(c) {
            if d == b {
                continue;
            }
            let marks = self.pag.edge_marks(b, c);
            if !self.r1_visit(b, c, d, visited) {
                // The speculative continuation failed; restore the b--c
                // marks in case the failed subtree re-entered the edge.
                if let Some(marks) = marks {
                    self.pag.set_edge_marks(b, c, marks);
                }
            }
        }

        true
    }
}
