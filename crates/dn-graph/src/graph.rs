use std::collections::HashMap;

use dn_core::NodeId;

/// Undirected weighted simple graph over skeleton node ids.
///
/// Nodes are stored densely in insertion order; algorithms that need matrices
/// work on the dense index (`0..node_count()`) and translate back with
/// [`SkeletonGraph::node_at`].
#[derive(Debug, Clone, Default)]
pub struct SkeletonGraph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

impl SkeletonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` if absent and returns its dense index.
    pub fn add_node(&mut self, id: NodeId) -> usize {
        if let Some(&i) = self.index.get(&id) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(id);
        self.index.insert(id, i);
        self.adjacency.push(Vec::new());
        i
    }

    /// Adds the undirected edge `a - b`. An existing edge keeps its adjacency
    /// position and takes the new weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let ia = self.add_node(a);
        let ib = self.add_node(b);

        if let Some(slot) = self.adjacency[ia].iter_mut().find(|(n, _)| *n == ib) {
            slot.1 = weight;
            if ia != ib
                && let Some(back) = self.adjacency[ib].iter_mut().find(|(n, _)| *n == ia)
            {
                back.1 = weight;
            }
            return;
        }

        self.adjacency[ia].push((ib, weight));
        if ia != ib {
            self.adjacency[ib].push((ia, weight));
        }
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn node_at(&self, idx: usize) -> NodeId {
        self.nodes[idx]
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Neighbours of the node at dense index `idx` with edge weights, in
    /// adjacency order.
    pub fn neighbors_at(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.index_of(id)
            .into_iter()
            .flat_map(move |i| self.adjacency[i].iter().map(|&(n, _)| self.nodes[n]))
    }

    /// Degree of `id`; a self-loop counts twice. Unknown ids have degree 0.
    pub fn degree(&self, id: NodeId) -> usize {
        self.index_of(id).map_or(0, |i| self.degree_at(i))
    }

    pub fn degree_at(&self, idx: usize) -> usize {
        self.adjacency[idx]
            .iter()
            .map(|&(n, _)| if n == idx { 2 } else { 1 })
            .sum()
    }

    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.adjacency[ia]
            .iter()
            .find(|&&(n, _)| n == ib)
            .map(|&(_, w)| w)
    }

    /// Every undirected edge once as `(a, b, weight)`, reported from the
    /// endpoint that comes first in node order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, adj)| {
            adj.iter()
                .filter(move |&&(n, _)| n >= i)
                .map(move |&(n, w)| (self.nodes[i], self.nodes[n], w))
        })
    }

    /// Induced subgraph over the nodes accepted by `keep`, preserving node and
    /// adjacency order.
    pub fn induced_subgraph(&self, mut keep: impl FnMut(NodeId) -> bool) -> SkeletonGraph {
        let kept: Vec<bool> = self.nodes.iter().map(|&id| keep(id)).collect();

        let mut sub = SkeletonGraph::new();
        for (i, &id) in self.nodes.iter().enumerate() {
            if kept[i] {
                sub.add_node(id);
            }
        }
        for (i, adj) in self.adjacency.iter().enumerate() {
            if !kept[i] {
                continue;
            }
            let si = sub.index[&self.nodes[i]];
            for &(n, w) in adj.iter().filter(|&&(n, _)| kept[n]) {
                if n >= i {
                    sub.edge_count += 1;
                }
                sub.adjacency[si].push((sub.index[&self.nodes[n]], w));
            }
        }

        sub
    }

    /// Subgraph induced by nodes of degree greater than one, i.e. the graph
    /// with every endpoint removed.
    pub fn without_endpoints(&self) -> SkeletonGraph {
        self.induced_subgraph(|id| self.degree(id) > 1)
    }

    /// Returns `true` when every node is reachable from the first one. The
    /// empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.nodes.is_empty() {
            return true;
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![0_usize];
        seen[0] = true;
        let mut reached = 1_usize;
        while let Some(i) = stack.pop() {
            for &(n, _) in &self.adjacency[i] {
                if !seen[n] {
                    seen[n] = true;
                    reached += 1;
                    stack.push(n);
                }
            }
        }
        reached == self.nodes.len()
    }
}
