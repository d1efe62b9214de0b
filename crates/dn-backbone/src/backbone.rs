use dn_core::NodeId;

/// Trunk of a skeleton: a root plus trunk edges `(parent, child)` in emission
/// order.
///
/// A path backbone has one edge per consecutive node pair. A spanning-tree
/// backbone lists depth-first tree edges, so a parent may appear in several
/// edges. In both cases each edge's parent is the root or the child of an
/// earlier edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backbone {
    root: Option<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Backbone {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path(path: &[NodeId]) -> Self {
        Self {
            root: path.first().copied(),
            edges: path.windows(2).map(|w| (w[0], w[1])).collect(),
        }
    }

    /// Tree edges rooted at `root`. An edge list without a root is only
    /// meaningful when empty.
    pub fn from_tree_edges(root: NodeId, edges: Vec<(NodeId, NodeId)>) -> Self {
        Self {
            root: Some(root),
            edges,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct nodes on the trunk.
    pub fn node_count(&self) -> usize {
        match self.root {
            Some(_) => self.edges.len() + 1,
            None => 0,
        }
    }

    /// Root first, then the child of every trunk edge.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root
            .into_iter()
            .chain(self.edges.iter().map(|&(_, child)| child))
    }

    /// Whether the trunk is long enough to describe a dendrite.
    pub fn is_usable(&self, min_nodes: usize) -> bool {
        self.node_count() >= min_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::Backbone;

    #[test]
    fn path_becomes_consecutive_edges() {
        let b = Backbone::from_path(&[4, 8, 15]);
        assert_eq!(b.root(), Some(4));
        assert_eq!(b.edges(), &[(4, 8), (8, 15)]);
        assert_eq!(b.nodes().collect::<Vec<_>>(), vec![4, 8, 15]);
        assert_eq!(b.node_count(), 3);
        assert!(b.is_usable(3));
        assert!(!b.is_usable(4));
    }

    #[test]
    fn empty_and_single_node_backbones() {
        let e = Backbone::from_path(&[]);
        assert!(e.is_empty());
        assert_eq!(e.node_count(), 0);
        assert_eq!(e, Backbone::empty());

        let single = Backbone::from_path(&[9]);
        assert_eq!(single.node_count(), 1);
        assert!(single.edges().is_empty());
    }

    #[test]
    fn forked_tree_edges_count_distinct_nodes() {
        let b = Backbone::from_tree_edges(1, vec![(1, 2), (2, 3), (1, 4)]);
        assert_eq!(b.node_count(), 4);
        assert_eq!(b.nodes().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
