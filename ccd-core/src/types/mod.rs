//! Shared data types for the CCD engine.

pub mod collections;
pub mod endpoint;
pub mod skeleton;
pub mod triple;
pub mod variable;

pub use endpoint::Endpoint;
pub use skeleton::Skeleton;
pub use triple::Triple;
pub use variable::{VarId, Variable, VariableSet};
