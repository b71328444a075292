//! The CCD orientation engine.

mod colliders;
mod propagation;
mod steps;

pub use colliders::ColliderFindings;

use ccd_core::config::SearchConfig;
use ccd_core::errors::{ConfigError, SearchError};
use ccd_core::traits::{IndependenceOracle, Knowledge, SepsetOracle};
use ccd_core::types::{Endpoint, Skeleton, VarId, VariableSet};
use tracing::info;

use crate::pag::Pag;
use crate::sepsets::{SepsetMap, SuperSepsetMap};

/// Cyclic Causal Discovery orientation engine.
///
/// Transforms an undirected skeleton into the PAG of the equivalence class
/// of (possibly cyclic) causal structures consistent with the oracle's
/// answers. Deterministic given those answers; the collider scan is the
/// only parallel phase.
pub struct CcdSearch<'a> {
    variables: &'a VariableSet,
    independence: &'a dyn IndependenceOracle,
    sepset_oracle: &'a dyn SepsetOracle,
    knowledge: Option<&'a dyn Knowledge>,
    config: SearchConfig,
}

impl<'a> CcdSearch<'a> {
    pub fn new(
        variables: &'a VariableSet,
        independence: &'a dyn IndependenceOracle,
        sepset_oracle: &'a dyn SepsetOracle,
    ) -> Self {
        Self {
            variables,
            independence,
            sepset_oracle,
            knowledge: None,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_knowledge(mut self, knowledge: &'a dyn Knowledge) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Run the search.
    ///
    /// Returns the PAG, or an error when an internal consistency check
    /// fails or the independence model admits no valid PAG (step E).
    pub fn search(&self, skeleton: &Skeleton) -> Result<Pag, SearchError> {
        self.validate(skeleton)?;
        info!(
            variables = self.variables.len(),
            edges = skeleton.len(),
            "starting CCD orientation"
        );

        let mut run = SearchRun {
            vars: self.variables,
            independence: self.independence,
            sepset_oracle: self.sepset_oracle,
            knowledge: self.knowledge,
            depth: self.config.effective_depth(),
            apply_r1: self.config.effective_apply_r1(),
            chunk: self.config.effective_collider_chunk(),
            pag: Pag::from_skeleton(self.variables, skeleton),
            sepsets: SepsetMap::new(),
            supersepsets: SuperSepsetMap::new(),
        };
        run.pag.reorient_all_circle();

        run.detect_colliders()?;
        run.initial_r1_sweep();
        run.step_c();
        run.step_d()?;
        if run.step_e()? {
            return Ok(run.pag);
        }
        run.step_f()?;

        Ok(run.pag)
    }

    fn validate(&self, skeleton: &Skeleton) -> Result<(), ConfigError> {
        if self.variables.is_empty() {
            return Err(ConfigError::EmptyVariableSet);
        }
        for &(a, b) in skeleton.edges() {
            if !self.variables.contains(a) {
                return Err(ConfigError::UnknownVariable(a));
            }
            if !self.variables.contains(b) {
                return Err(ConfigError::UnknownVariable(b));
            }
            if a == b {
                return Err(ConfigError::SelfLoop(a));
            }
        }
        Ok(())
    }
}

/// Mutable state of one search run, shared by the phase implementations
/// in `colliders`, `propagation`, and `steps`.
pub(crate) struct SearchRun<'a> {
    pub(crate) vars: &'a VariableSet,
    pub(crate) independence: &'a dyn IndependenceOracle,
    pub(crate) sepset_oracle: &'a dyn SepsetOracle,
    pub(crate) knowledge: Option<&'a dyn Knowledge>,
    pub(crate) depth: Option<usize>,
    pub(crate) apply_r1: bool,
    pub(crate) chunk: usize,
    pub(crate) pag: Pag,
    pub(crate) sepsets: SepsetMap,
    pub(crate) supersepsets: SuperSepsetMap,
}

impl SearchRun<'_> {
    /// Knowledge check for a directed orientation `from -> to`.
    pub(crate) fn forbidden(&self, from: VarId, to: VarId) -> bool {
        self.knowledge.is_some_and(|k| k.forbids(from, to))
    }

    /// Cached query against the external sepset oracle.
    pub(crate) fn sepset(&mut self, x: VarId, y: VarId) -> Option<Vec<VarId>> {
        self.sepsets
            .get_or_query(x, y, self.sepset_oracle)
            .map(<[VarId]>::to_vec)
    }

    /// Would orienting x*->y create an additional, unvetted collider at y:
    /// some other neighbor of y already carries an arrow into y while the
    /// x--y edge does not.
    pub(crate) fn would_create_bad_collider(&self, x: VarId, y: VarId) -> bool {
        for z in self.pag.adjacent(y) {
            if z == x {
                continue;
            }
            if self.pag.endpoint(x, y) != Some(Endpoint::Arrow)
                && self.pag.endpoint(z, y) == Some(Endpoint::Arrow)
            {
                return true;
            }
        }
        false
    }
}
