//! The mutable PAG under orientation.

pub mod graph;
pub mod types;

pub use graph::Pag;
pub use types::EdgeMarks;
