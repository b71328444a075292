//! Search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a CCD search run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum conditioning-subset size during the collider scan.
    /// Default: unbounded.
    pub depth: Option<u32>,
    /// Enable rule R1 orientation propagation. Default: true.
    pub apply_r1: Option<bool>,
    /// Node-chunk size below which collider-scan work stays on one
    /// worker. Default: 20.
    pub collider_chunk: Option<u32>,
}

impl SearchConfig {
    /// The effective subset-size bound; `None` means full powerset.
    pub fn effective_depth(&self) -> Option<usize> {
        self.depth.map(|d| d as usize)
    }

    /// Returns the effective R1 toggle, defaulting to true.
    pub fn effective_apply_r1(&self) -> bool {
        self.apply_r1.unwrap_or(true)
    }

    /// Returns the effective chunk size, defaulting to 20.
    pub fn effective_collider_chunk(&self) -> usize {
        self.collider_chunk.unwrap_or(20).max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_apply() {
        let config = SearchConfig::default();
        assert_eq!(config.effective_depth(), None);
        assert!(config.effective_apply_r1());
        assert_eq!(config.effective_collider_chunk(), 20);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "depth": 3, "apply_r1": false }"#).unwrap();
        assert_eq!(config.effective_depth(), Some(3));
        assert!(!config.effective_apply_r1());
        assert_eq!(config.effective_collider_chunk(), 20);
    }

    #[test]
    fn zero_chunk_is_clamped() {
        let config = SearchConfig {
            collider_chunk: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_collider_chunk(), 1);
    }
}
