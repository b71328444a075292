//! ccd-core: Core types, traits, errors, and config for the CCD orientation engine.
//!
//! This crate carries everything the engine crate (`ccd-search`) shares with
//! callers but that contains no algorithm code:
//! - Types: the fixed variable registry, endpoint marks, symmetric triple
//!   keys, and the skeleton input
//! - Traits: the independence-test oracle, sepset producer, and
//!   background-knowledge seams
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: the search configuration with serde defaults

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

pub use config::SearchConfig;
pub use errors::{CcdErrorCode, ConfigError, SearchError};
pub use traits::{
    IndependenceOracle, IndependenceResult, Knowledge, NoKnowledge, SepsetOracle,
};
pub use types::{Endpoint, Skeleton, Triple, VarId, Variable, VariableSet};
