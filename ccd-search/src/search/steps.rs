//! The deterministic rule passes C, D, E, F.
//!
//! C orients tails from external sepsets; D certifies dotted-underline
//! triples by iterative-deepening conditioning-set search, recording one
//! SuperSepset per triple; E consumes the SuperSepsets for the final
//! orientation and is the only abort path; F adds supplementary
//! orientations over the adjacency union of each dotted triple.

use ccd_core::errors::SearchError;
use ccd_core::types::collections::FxHashMap;
use ccd_core::types::{Endpoint, Triple, VarId};
use tracing::debug;

use super::SearchRun;
use crate::combinat::Combinations;

impl SearchRun<'_> {
    /// Step C: tail orientation from external sepsets.
    pub(crate) fn step_c(&mut self) {
        debug!("step C");

        'edges: for (x, y) in self.pag.edges() {
            let adj_x = self.pag.adjacent(x);
            let adj_y = self.pag.adjacent(y);

            // Protect established underline constraints: skip the edge
            // when a neighbor arrow into x coexists with underline
            // <y, x, neighbor>.
            for &node in &adj_x {
                if self.pag.endpoint(node, x) == Some(Endpoint::Arrow)
                    && self.pag.is_underline(y, x, node)
                {
                    continue 'edges;
                }
            }

            for a in self.vars.ids() {
                if a == x || a == y {
                    continue;
                }
                if adj_x.contains(&a) || adj_y.contains(&a) {
                    continue;
                }

                // Orientable: y o-> x with circle at x and circle or tail
                // at y.
                let at_x = self.pag.endpoint(y, x);
                let at_y = self.pag.endpoint(x, y);
                if !(at_x == Some(Endpoint::Circle)
                    && (at_y == Some(Endpoint::Circle) || at_y == Some(Endpoint::Tail)))
                {
                    continue;
                }

                if self.would_create_bad_collider(x, y) {
                    continue;
                }
                if self.forbidden(y, x) {
                    continue;
                }

                let Some(sepset) = self.sepset(a, y) else {
                    continue;
                };
                if !self.sepset_oracle.is_independent(a, x, &sepset) {
                    self.pag.set_directed(y, x);
                    self.propagate_r1(y, x);
                    continue 'edges;
                }
            }
        }
    }

    /// Step D: dotted-underline discovery by iterative deepening.
    pub(crate) fn step_d(&mut self) -> Result<(), SearchError> {
        debug!("step D");

        let local = self.local_sets();
        let max_local = local.values().map(Vec::len).max().unwrap_or(0);

        let mut m = 1;
        while m <= max_local {
            let Some(max_count) = self.max_count_local_minus_sep(&local)? else {
                break;
            };
            if max_count < m {
                break;
            }
            self.step_d_pass(&local, m)?;
            m += 1;
        }

        Ok(())
    }

    /// One full pass over all middle nodes at subset size `m`.
    fn step_d_pass(
        &mut self,
        local: &FxHashMap<VarId, Vec<VarId>>,
        m: usize,
    ) -> Result<(), SearchError> {
        for b in self.vars.ids() {
            let adjacent = self.pag.adjacent(b);
            if adjacent.len() < 2 {
                continue;
            }

            for pair in Combinations::new(adjacent.len(), 2) {
                let (a, c) = (adjacent[pair[0]], adjacent[pair[1]]);
                if self.pag.is_adjacent(a, c) {
                    continue;
                }
                let triple = Triple::new(a, b, c);
                let (a, c) = (triple.x(), triple.z());

                if self.supersepsets.contains(&triple) {
                    continue;
                }
                if !self.pag.is_def_collider(a, b, c) {
                    continue;
                }

                let sepset = self.sepset(a, c).ok_or(SearchError::MissingSepset {
                    triple,
                    x: a,
                    y: c,
                })?;
                let pool = local_minus_sep(local, &sepset, a, b, c);
                if pool.len() < m {
                    continue;
                }

                for combo in Combinations::new(pool.len(), m) {
                    // The pool excludes b, c, and the sepset, but the
                    // external sepset may itself contain b.
                    let mut candidate: Vec<VarId> =
                        combo.iter().map(|&i| pool[i]).collect();
                    if !sepset.contains(&b) {
                        candidate.push(b);
                    }
                    candidate.extend_from_slice(&sepset);

                    if self.independence.is_independent(a, c, &candidate) {
                        debug!(%triple, "adding dotted underline");
                        self.supersepsets.insert(triple, candidate);
                        self.pag.add_dotted_underline(triple);
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Local(v) for every node: all adjacents, plus every x for which
    /// some y makes <x, y, v> a definite collider. Sorted and deduplicated.
    fn local_sets(&self) -> FxHashMap<VarId, Vec<VarId>> {
        let mut local = FxHashMap::default();
        for v in self.vars.ids() {
            let mut set = self.pag.adjacent(v);
            for x in self.vars.ids() {
                if x == v || set.contains(&x) {
                    continue;
                }
                let has_collider = self
                    .vars
                    .ids()
                    .any(|y| y != v && y != x && self.pag.is_def_collider(x, y, v));
                if has_collider {
                    set.push(x);
                }
            }
            set.sort_unstable();
            local.insert(v, set);
        }
        local
    }

    /// The largest |Local(a) \ (sepset(a, c) ∪ {b, c})| over all
    /// definite-collider triples not already underline, or `None` when no
    /// triple is eligible.
    fn max_count_local_minus_sep(
        &mut self,
        local: &FxHashMap<VarId, Vec<VarId>>,
    ) -> Result<Option<usize>, SearchError> {
        let mut max_count = None;
        for b in self.vars.ids() {
            let adjacent = self.pag.adjacent(b);
            if adjacent.len() < 2 {
                continue;
            }
            for pair in Combinations::new(adjacent.len(), 2) {
                let (a, c) = (adjacent[pair[0]], adjacent[pair[1]]);
                if self.pag.is_adjacent(a, c) {
                    continue;
                }
                if self.pag.is_underline(a, b, c) {
                    continue;
                }
                let triple = Triple::new(a, b, c);
                let (a, c) = (triple.x(), triple.z());
                if !self.pag.is_def_collider(a, b, c) {
                    continue;
                }
                let sepset = self.sepset(a, c).ok_or(SearchError::MissingSepset {
                    triple,
                    x: a,
                    y: c,
                })?;
                let count = local_minus_sep(local, &sepset, a, b, c).len();
                max_count = Some(max_count.map_or(count, |m: usize| m.max(count)));
            }
        }
        Ok(max_count)
    }

    /// Step E: final orientation from SuperSepsets.
    ///
    /// Returns `Ok(true)` for the trivial (< 4 variable) case, which
    /// finishes the search immediately. A bad-collider conflict means the
    /// independence model admits no valid PAG and fails the whole search.
    pub(crate) fn step_e(&mut self) -> Result<bool, SearchError> {
        debug!("step E");

        if self.vars.len() < 4 {
            return Ok(true);
        }

        for triple in self.pag.dotted_underlines() {
            let (a, b) = (triple.x(), triple.y());
            let supsepset = self
                .supersepsets
                .get(&triple)
                .ok_or(SearchError::MissingSuperSepset { triple })?
                .clone();

            for d in self.pag.adjacent(a) {
                if d == b {
                    continue;
                }

                if supsepset.contains(&d) {
                    // Orient b *-o d as b *- d.
                    if self.pag.endpoint(b, d) != Some(Endpoint::Circle) {
                        continue;
                    }
                    self.pag.set_endpoint(b, d, Endpoint::Tail);
                } else {
                    if self.pag.endpoint(d, b) == Some(Endpoint::Arrow) {
                        continue;
                    }
                    if self.pag.endpoint(b, d) != Some(Endpoint::Circle) {
                        continue;
                    }
                    if self.would_create_bad_collider(b, d) {
                        return Err(SearchError::InconsistentModel { triple, b, d });
                    }
                    if self.forbidden(b, d) {
                        continue;
                    }
                    self.pag.set_directed(b, d);
                    self.propagate_r1(b, d);
                }
            }
        }

        Ok(false)
    }

    /// Step F: supplementary orientation over each dotted triple's
    /// adjacency union.
    pub(crate) fn step_f(&mut self) -> Result<(), SearchError> {
        debug!("step F");

        for triple in self.pag.dotted_underlines() {
            let (a, b, c) = (triple.x(), triple.y(), triple.z());
            let supsepset = self
                .supersepsets
                .get(&triple)
                .ok_or(SearchError::MissingSuperSepset { triple })?
                .clone();

            let mut union = self.pag.adjacent(a);
            for d in self.pag.adjacent(c) {
                if !union.contains(&d) {
                    union.push(d);
                }
            }
            union.sort_unstable();

            for d in union {
                if self.pag.endpoint(b, d) != Some(Endpoint::Circle) {
                    continue;
                }
                if self.pag.endpoint(d, b) == Some(Endpoint::Arrow) {
                    continue;
                }
                if self.pag.is_adjacent(a, d) && self.pag.is_adjacent(c, d) {
                    continue;
                }
                if !self.pag.is_adjacent(b, d) {
                    continue;
                }
                if self.would_create_bad_collider(b, d) {
                    continue;
                }
                if self.forbidden(b, d) {
                    continue;
                }

                let mut candidate = supsepset.clone();
                if !candidate.contains(&d) {
                    candidate.push(d);
                }
                if !self.sepset_oracle.is_independent(a, c, &candidate) {
                    self.pag.set_directed(b, d);
                    self.propagate_r1(b, d);
                }
            }
        }

        Ok(())
    }
}

/// Local(a) \ (sepset ∪ {b, c}), order-preserving over the sorted local set.
fn local_minus_sep(
    local: &FxHashMap<VarId, Vec<VarId>>,
    sepset: &[VarId],
    a: VarId,
    b: VarId,
    c: VarId,
) -> Vec<VarId> {
    local.get(&a).map_or_else(Vec::new, |set| {
        set.iter()
            .copied()
            .filter(|&v| v != b && v != c && !sepset.contains(&v))
            .collect()
    })
}
