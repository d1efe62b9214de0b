use dn_core::BranchRecord;

use crate::graph::SkeletonGraph;

/// Builds the branch graph: one weighted edge per record, in record order.
pub fn build_graph(records: &[BranchRecord]) -> SkeletonGraph {
    let mut graph = SkeletonGraph::new();
    for r in records {
        graph.add_edge(r.src, r.dst, r.length);
    }
    graph
}

#[cfg(test)]
mod tests {
    use dn_core::BranchRecord;

    use super::build_graph;

    fn rec(src: u64, dst: u64, length: f64) -> BranchRecord {
        BranchRecord::new(src, dst, length, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0])
    }

    #[test]
    fn t_junction_graph() {
        let g = build_graph(&[rec(1, 2, 1.0), rec(2, 3, 1.0), rec(2, 4, 1.0)]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(2), 3);
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn lengths_pass_through_unvalidated() {
        let g = build_graph(&[rec(7, 9, 0.0), rec(9, 11, 12.5)]);
        assert_eq!(g.weight(7, 9), Some(0.0));
        assert_eq!(g.weight(11, 9), Some(12.5));
    }

    #[test]
    fn loop_in_skeleton_is_kept() {
        let g = build_graph(&[
            rec(1, 2, 1.0),
            rec(2, 3, 1.0),
            rec(3, 4, 1.0),
            rec(4, 2, 1.0),
        ]);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.degree(2), 3);
        assert!(g.is_connected());
    }

    #[test]
    fn no_records_gives_empty_graph() {
        assert!(build_graph(&[]).is_empty());
    }
}
