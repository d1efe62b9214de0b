use std::collections::HashMap;

use dn_core::{BranchRecord, Coord, Dimensionality, Error, NodeId, Result};

/// Scaled output-order coordinate per node id.
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    dims: Dimensionality,
    coords: HashMap<NodeId, Coord>,
}

impl PositionMap {
    pub fn new(dims: Dimensionality) -> Self {
        Self {
            dims,
            coords: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: NodeId, coord: Coord) {
        self.coords.insert(id, coord);
    }

    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<Coord> {
        self.coords.get(&id).copied()
    }

    /// Like [`PositionMap::get`] but a missing node is malformed input.
    pub fn require(&self, id: NodeId) -> Result<Coord> {
        self.get(id).ok_or(Error::MissingPosition(id))
    }
}

/// Indexes both endpoints of every record, reordered to output axes and
/// multiplied by `scale`. A node seen again later overwrites its earlier
/// position.
pub fn build_positions(
    records: &[BranchRecord],
    scale: f64,
    dims: Dimensionality,
) -> Result<PositionMap> {
    let mut map = PositionMap::new(dims);
    for (i, r) in records.iter().enumerate() {
        for (id, raw) in r.endpoints() {
            let coord = Coord::from_image_axes(raw, dims).ok_or(Error::DimensionMismatch {
                record: i,
                expected: dims.components(),
                actual: raw.len(),
            })?;
            map.insert(id, coord * scale);
        }
    }
    Ok(map)
}
