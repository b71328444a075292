//! Data-parallel collider detection over unshielded triples.
//!
//! Every node with two or more neighbors is scanned independently: each
//! unshielded neighbor pair is classified collider or non-collider by the
//! conditioning set minimizing the oracle's score over the powersets of
//! both outer nodes' neighbor sets. The scan parallelizes over node
//! chunks; the reduction that orients the discovered colliders is
//! sequential and ordered.

use std::cmp::Ordering;

use ccd_core::errors::SearchError;
use ccd_core::traits::IndependenceOracle;
use ccd_core::types::collections::FxHashMap;
use ccd_core::types::{Endpoint, Triple, VarId};
use rayon::prelude::*;
use tracing::debug;

use super::SearchRun;
use crate::combinat::{Combinations, SubsetsUpTo};
use crate::pag::Pag;

/// Classified unshielded triples from one scan, keyed by triple.
///
/// Each triple is produced by exactly one worker (the one scanning its
/// middle node), so merging partial findings never collides on a key.
#[derive(Debug, Default)]
pub struct ColliderFindings {
    pub colliders: FxHashMap<Triple, f64>,
    pub noncolliders: FxHashMap<Triple, f64>,
}

impl ColliderFindings {
    fn merge(mut self, other: Self) -> Self {
        self.colliders.extend(other.colliders);
        self.noncolliders.extend(other.noncolliders);
        self
    }

    /// Colliders by descending score, ties broken by canonical triple
    /// order, so the orientation reduction is deterministic.
    pub fn sorted_colliders(&self) -> Vec<Triple> {
        let mut scored: Vec<(Triple, f64)> =
            self.colliders.iter().map(|(t, s)| (*t, *s)).collect();
        scored.sort_by(|a, b| match b.1.total_cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });
        scored.into_iter().map(|(t, _)| t).collect()
    }
}

impl SearchRun<'_> {
    /// Run the parallel scan, then orient colliders and record underlines.
    pub(crate) fn detect_colliders(&mut self) -> Result<(), SearchError> {
        let nodes: Vec<VarId> = self.vars.ids().collect();
        let pag = &self.pag;
        let oracle = self.independence;
        let depth = self.depth;

        let findings = nodes
            .par_chunks(self.chunk)
            .map(|chunk| {
                let mut acc = ColliderFindings::default();
                for &b in chunk {
                    scan_node(pag, oracle, depth, b, &mut acc)?;
                }
                Ok::<_, SearchError>(acc)
            })
            .try_reduce(ColliderFindings::default, |a, b| Ok(a.merge(b)))?;

        debug!(
            colliders = findings.colliders.len(),
            noncolliders = findings.noncolliders.len(),
            "collider scan complete"
        );

        for triple in findings.sorted_colliders() {
            let (a, b, c) = (triple.x(), triple.y(), triple.z());
            // Skip when an arrow already points away from b on either side.
            if self.pag.endpoint(b, a) == Some(Endpoint::Arrow)
                || self.pag.endpoint(b, c) == Some(Endpoint::Arrow)
            {
                continue;
            }
            if self.forbidden(a, b) || self.forbidden(c, b) {
                continue;
            }
            self.pag.set_directed(a, b);
            self.pag.set_directed(c, b);
        }

        for &triple in findings.noncolliders.keys() {
            self.pag.add_underline(triple);
        }

        Ok(())
    }
}

/// Classify every unshielded triple centered at `b`.
fn scan_node(
    pag: &Pag,
    oracle: &dyn IndependenceOracle,
    depth: Option<usize>,
    b: VarId,
    out: &mut ColliderFindings,
) -> Result<(), SearchError> {
    let adjacent = pag.adjacent(b);
    if adjacent.len() < 2 {
        return Ok(());
    }

    for pair in Combinations::new(adjacent.len(), 2) {
        let a = adjacent[pair[0]];
        let c = adjacent[pair[1]];

        if pag.is_adjacent(a, c) {
            continue;
        }

        let mut best_score = f64::INFINITY;
        let mut best: Option<Vec<VarId>> = None;

        let adj_a = pag.adjacent(a);
        for combo in SubsetsUpTo::new(adj_a.len(), depth) {
            let s: Vec<VarId> = combo.iter().map(|&i| adj_a[i]).collect();
            let result = oracle.test(a, c, &s);
            if result.score < best_score {
                best_score = result.score;
                best = Some(s);
            }
        }

        let adj_c = pag.adjacent(c);
        for combo in SubsetsUpTo::new(adj_c.len(), depth) {
            let s: Vec<VarId> = combo.iter().map(|&i| adj_c[i]).collect();
            let result = oracle.test(c, a, &s);
            if result.score < best_score {
                best_score = result.score;
                best = Some(s);
            }
        }

        let best = best.ok_or(SearchError::NoMinimizingSet {
            triple: Triple::new(a, b, c),
        })?;

        if best.contains(&b) {
            out.noncolliders.insert(Triple::new(a, b, c), best_score);
        } else {
            out.colliders.insert(Triple::new(a, b, c), best_score);
        }
    }

    Ok(())
}
