use dn_core::NodeId;
use dn_graph::SkeletonGraph;
use petgraph::unionfind::UnionFind;

use crate::{Backbone, BackboneExtractor};

/// Depth-first tree edges of a minimum spanning tree over the branch-point
/// core.
///
/// Endpoints are removed twice: once from the skeleton and once more from the
/// resulting core, which strips the stubs left behind by the first pass. The
/// spanning tree is built with Kruskal over branch lengths and walked from the
/// first core node.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanningTreeWalk;

impl BackboneExtractor for SpanningTreeWalk {
    fn extract(&self, graph: &SkeletonGraph) -> Backbone {
        let core = graph.without_endpoints().without_endpoints();
        if core.is_empty() {
            return Backbone::empty();
        }

        let mst = minimum_spanning_tree(&core);
        let root = mst.node_at(0);
        Backbone::from_tree_edges(root, dfs_tree_edges(&mst, 0))
    }
}

/// Kruskal spanning forest. Node order is copied from `graph`; each node's
/// adjacency lists tree edges in acceptance order.
fn minimum_spanning_tree(graph: &SkeletonGraph) -> SkeletonGraph {
    let mut candidates: Vec<(NodeId, NodeId, f64)> =
        graph.edges().filter(|&(a, b, _)| a != b).collect();
    // Stable, so equal weights keep graph edge order.
    candidates.sort_by(|x, y| x.2.total_cmp(&y.2));

    let mut tree = SkeletonGraph::new();
    for id in graph.nodes() {
        tree.add_node(id);
    }

    let mut components = UnionFind::<usize>::new(graph.node_count());
    for (a, b, w) in candidates {
        let (Some(ia), Some(ib)) = (graph.index_of(a), graph.index_of(b)) else {
            continue;
        };
        if components.union(ia, ib) {
            tree.add_edge(a, b, w);
        }
    }

    tree
}

/// Tree edges `(parent, child)` of an iterative depth-first walk from the node
/// at dense index `start`, visiting neighbours in adjacency order.
fn dfs_tree_edges(graph: &SkeletonGraph, start: usize) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    visited[start] = true;

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        let neighbors = graph.neighbors_at(node);

        let Some(offset) = neighbors[cursor..]
            .iter()
            .position(|&(next, _)| !visited[next])
        else {
            stack.pop();
            continue;
        };

        let child = neighbors[cursor + offset].0;
        top.1 = cursor + offset + 1;
        visited[child] = true;
        edges.push((graph.node_at(node), graph.node_at(child)));
        stack.push((child, 0));
    }

    edges
}

#[cfg(test)]
mod tests {
    use dn_graph::SkeletonGraph;

    use super::{SpanningTreeWalk, dfs_tree_edges, minimum_spanning_tree};
    use crate::BackboneExtractor;

    fn graph(edges: &[(u64, u64, f64)]) -> SkeletonGraph {
        let mut g = SkeletonGraph::new();
        for &(a, b, w) in edges {
            g.add_edge(a, b, w);
        }
        g
    }

    #[test]
    fn kruskal_drops_heaviest_cycle_edge() {
        let g = graph(&[(1, 2, 1.0), (2, 3, 2.0), (3, 1, 5.0), (3, 4, 1.0)]);
        let mst = minimum_spanning_tree(&g);
        assert_eq!(mst.edge_count(), 3);
        assert_eq!(mst.weight(3, 1), None);
        assert_eq!(mst.nodes().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn dfs_visits_in_adjacency_order() {
        let g = graph(&[(1, 2, 1.0), (1, 3, 1.0), (2, 4, 1.0), (3, 5, 1.0)]);
        let edges = dfs_tree_edges(&g, 0);
        assert_eq!(edges, vec![(1, 2), (2, 4), (1, 3), (3, 5)]);
    }

    #[test]
    fn double_restriction_strips_stubs() {
        // Ladder-like core with a stub: 2-3-4-5-2 loop plus 5-6 where 6 only
        // holds endpoints.
        let g = graph(&[
            (2, 3, 1.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (5, 2, 1.0),
            (5, 6, 1.0),
            (6, 60, 1.0),
            (6, 61, 1.0),
            (2, 20, 1.0),
        ]);
        let b = SpanningTreeWalk.extract(&g);
        assert_eq!(b.root(), Some(2));
        assert_eq!(b.node_count(), 4);
        assert!(b.nodes().all(|n| n != 6));
        for (parent, child) in b.edges() {
            assert!(g.weight(*parent, *child).is_some());
        }
    }

    #[test]
    fn star_core_collapses_to_hub() {
        let g = graph(&[
            (1, 2, 1.0),
            (2, 3, 1.0),
            (2, 4, 1.0),
            (1, 11, 1.0),
            (1, 12, 1.0),
            (3, 31, 1.0),
            (3, 32, 1.0),
            (4, 41, 1.0),
            (4, 42, 1.0),
        ]);
        let b = SpanningTreeWalk.extract(&g);
        assert_eq!(b.root(), Some(2));
        assert!(b.edges().is_empty());
        assert_eq!(b.node_count(), 1);
    }

    #[test]
    fn forked_core_yields_branching_edges() {
        // Hub 2 with three two-hop arms; the arm tips 9, 7 and 8 carry
        // endpoints and fall away in the second restriction.
        let g = graph(&[
            (2, 1, 1.0),
            (2, 3, 1.0),
            (2, 4, 1.0),
            (1, 9, 1.0),
            (3, 7, 1.0),
            (4, 8, 1.0),
            (9, 90, 1.0),
            (9, 91, 1.0),
            (7, 70, 1.0),
            (7, 71, 1.0),
            (8, 80, 1.0),
            (8, 81, 1.0),
        ]);
        let b = SpanningTreeWalk.extract(&g);
        assert_eq!(b.root(), Some(2));
        assert_eq!(b.edges(), &[(2, 1), (2, 3), (2, 4)]);
        assert_eq!(b.node_count(), 4);
    }

    #[test]
    fn tiny_skeleton_is_empty() {
        let g = graph(&[(1, 2, 1.0), (2, 3, 1.0)]);
        assert!(SpanningTreeWalk.extract(&g).is_empty());
    }
}
