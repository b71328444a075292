//! Edge endpoint marks.

use serde::{Deserialize, Serialize};

/// One end mark of a PAG edge.
///
/// The two ends of an edge are independent; `A o-> B` carries `Circle`
/// proximal to A and `Arrow` proximal to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Circle,
    Arrow,
    Tail,
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Arrow => "arrow",
            Self::Tail => "tail",
        }
    }
}
