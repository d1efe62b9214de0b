use dn_backbone::Strategy;
use dn_core::Dimensionality;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Multiplied into every coordinate component (resolution level).
    pub scale: f64,
    /// Radius written for every node.
    pub radius: f64,
    pub dims: Dimensionality,
    pub strategy: Strategy,
    /// Segments whose backbone has fewer nodes are skipped.
    pub min_backbone_nodes: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            radius: 1.0,
            dims: Dimensionality::Volumetric,
            strategy: Strategy::Diameter,
            min_backbone_nodes: 3,
        }
    }
}
