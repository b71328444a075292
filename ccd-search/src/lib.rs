//! ccd-search: the CCD (Cyclic Causal Discovery) orientation engine.
//!
//! Given a conditional-independence oracle and an undirected skeleton over
//! a fixed variable set, the engine produces a Partial Ancestral Graph
//! (PAG) representing the equivalence class of possibly-cyclic causal
//! structures consistent with the observed independence facts.
//!
//! Pipeline:
//! 1. Circle-initialize the PAG from the skeleton
//! 2. Parallel collider scan over every unshielded triple
//! 3. Rule R1 propagation seeded from every directed edge
//! 4. Deterministic rule passes C, D, E, F
//!
//! Step E is the only abort path: it fails the whole search when the
//! independence model admits no valid PAG.

pub mod combinat;
pub mod pag;
pub mod search;
pub mod sepsets;

pub use pag::Pag;
pub use search::CcdSearch;
