//! Seams to the external collaborators: independence testing, sepset
//! production, and background knowledge.

pub mod knowledge;
pub mod oracle;
pub mod sepsets;

pub use knowledge::{Knowledge, NoKnowledge};
pub use oracle::{IndependenceOracle, IndependenceResult};
pub use sepsets::SepsetOracle;
