//! Hash collections used across the engine.
//!
//! FxHash beats SipHash for the small integer keys (variable ids, triples)
//! these maps are keyed by.

pub use rustc_hash::{FxHashMap, FxHashSet};
