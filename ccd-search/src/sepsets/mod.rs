//! Conditioning-set stores threading discoveries between steps.
//!
//! Both maps are write-once-per-key, read-many, and are dropped when the
//! search returns.

use ccd_core::traits::SepsetOracle;
use ccd_core::types::collections::FxHashMap;
use ccd_core::types::{Triple, VarId};

/// Cache of the external sepset oracle's answers, keyed by unordered pair.
/// A pair the oracle cannot separate is cached as `None`.
#[derive(Debug, Default)]
pub struct SepsetMap {
    map: FxHashMap<(VarId, VarId), Option<Vec<VarId>>>,
}

impl SepsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(x: VarId, y: VarId) -> (VarId, VarId) {
        if x <= y {
            (x, y)
        } else {
            (y, x)
        }
    }

    /// The cached sepset for the pair, querying the oracle on first use.
    pub fn get_or_query(
        &mut self,
        x: VarId,
        y: VarId,
        oracle: &dyn SepsetOracle,
    ) -> Option<&[VarId]> {
        self.map
            .entry(Self::key(x, y))
            .or_insert_with(|| oracle.sepset(x, y))
            .as_deref()
    }
}

/// Conditioning sets certifying dotted-underline triples, written exactly
/// once by step D before the triple enters the dotted-underline set.
#[derive(Debug, Default)]
pub struct SuperSepsetMap {
    map: FxHashMap<Triple, Vec<VarId>>,
}

impl SuperSepsetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triple: Triple, set: Vec<VarId>) {
        let previous = self.map.insert(triple, set);
        debug_assert!(previous.is_none(), "SuperSepset written twice for {triple}");
    }

    pub fn get(&self, triple: &Triple) -> Option<&Vec<VarId>> {
        self.map.get(triple)
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.map.contains_key(triple)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
