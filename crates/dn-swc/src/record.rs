use dn_core::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Trunk,
    Spine,
}

impl StructureKind {
    pub fn code(self) -> u8 {
        match self {
            Self::Trunk => 0,
            Self::Spine => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Trunk),
            1 => Some(Self::Spine),
            _ => None,
        }
    }
}

/// One emitted tree node. `parent` is `None` only for the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeRecord {
    pub id: usize,
    pub kind: StructureKind,
    pub coord: Coord,
    pub radius: f64,
    pub parent: Option<usize>,
}

impl TreeRecord {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Parent id as written to SWC, with -1 for the root.
    pub fn parent_code(&self) -> i64 {
        self.parent.map_or(-1, |p| p as i64)
    }
}
