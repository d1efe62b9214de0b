use thiserror::Error;

use crate::branch::NodeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("skeleton graph is empty")]
    EmptyGraph,
    #[error("branch record {record}: expected {expected} coordinate components, got {actual}")]
    DimensionMismatch {
        record: usize,
        expected: usize,
        actual: usize,
    },
    #[error("node {0} has no recorded position")]
    MissingPosition(NodeId),
    #[error("backbone is empty")]
    EmptyBackbone,
    #[error("backbone node {0} is not in the skeleton graph")]
    UnknownNode(NodeId),
    #[error("node {0} is not reachable from the backbone")]
    Unreachable(NodeId),
    #[error("trunk edge {parent} -> {child} starts at a node that was never emitted")]
    DetachedTrunkEdge { parent: NodeId, child: NodeId },
    #[error("swc line {line}: {reason}")]
    MalformedSwc { line: usize, reason: String },
    #[error("swc record {id}: {reason}")]
    InvalidTree { id: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_offending_item() {
        let e = Error::DimensionMismatch {
            record: 4,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            e.to_string(),
            "branch record 4: expected 3 coordinate components, got 2"
        );

        let e = Error::MissingPosition(17);
        assert_eq!(e.to_string(), "node 17 has no recorded position");
    }

    #[test]
    fn io_errors_pass_through_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let e = Error::from(io);
        assert_eq!(e.to_string(), "read-only volume");
    }
}
