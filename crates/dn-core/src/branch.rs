pub type NodeId = u64;

/// One skeleton branch between two junction or endpoint nodes.
///
/// Coordinates are raw image coordinates in image axis order: `z, y, x` for
/// volumes and `y, x` for planes. They are kept as slices of whatever length
/// the upstream table provided so that dimensionality errors surface when the
/// position index is built instead of being silently truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchRecord {
    pub src: NodeId,
    pub dst: NodeId,
    pub length: f64,
    pub src_coord: Vec<f64>,
    pub dst_coord: Vec<f64>,
}

impl BranchRecord {
    pub fn new(
        src: NodeId,
        dst: NodeId,
        length: f64,
        src_coord: impl Into<Vec<f64>>,
        dst_coord: impl Into<Vec<f64>>,
    ) -> Self {
        Self {
            src,
            dst,
            length,
            src_coord: src_coord.into(),
            dst_coord: dst_coord.into(),
        }
    }

    /// Both endpoints with their raw coordinates, source first.
    pub fn endpoints(&self) -> [(NodeId, &[f64]); 2] {
        [
            (self.src, self.src_coord.as_slice()),
            (self.dst, self.dst_coord.as_slice()),
        ]
    }
}
