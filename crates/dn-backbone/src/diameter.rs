use dn_graph::SkeletonGraph;

use crate::{Backbone, BackboneExtractor};

/// Longest shortest path between branch points.
///
/// Endpoints are dropped first, then all-pairs shortest paths are computed
/// with Floyd-Warshall over branch lengths. The pair with the largest finite
/// distance wins; ties keep the first pair in node order. A core with no pair
/// at positive distance yields an empty backbone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiameterPath;

impl BackboneExtractor for DiameterPath {
    fn extract(&self, graph: &SkeletonGraph) -> Backbone {
        let core = graph.without_endpoints();
        let n = core.node_count();
        if n < 2 {
            return Backbone::empty();
        }

        let sp = ShortestPaths::floyd_warshall(&core);

        let mut best = 0.0_f64;
        let mut pair = None;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = sp.dist(i, j);
                if d.is_finite() && d > best {
                    best = d;
                    pair = Some((i, j));
                }
            }
        }

        let Some((a, b)) = pair else {
            return Backbone::empty();
        };

        let path: Vec<_> = sp
            .path(a, b)
            .into_iter()
            .map(|idx| core.node_at(idx))
            .collect();
        Backbone::from_path(&path)
    }
}

/// Dense all-pairs distances and predecessors over dense node indices.
struct ShortestPaths {
    n: usize,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn floyd_warshall(graph: &SkeletonGraph) -> Self {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n * n];
        let mut pred = vec![None; n * n];

        for u in 0..n {
            dist[u * n + u] = 0.0;
            for &(v, w) in graph.neighbors_at(u) {
                if u != v && w < dist[u * n + v] {
                    dist[u * n + v] = w;
                    pred[u * n + v] = Some(u);
                }
            }
        }

        for k in 0..n {
            for u in 0..n {
                let d_uk = dist[u * n + k];
                if d_uk == f64::INFINITY {
                    continue;
                }
                for v in 0..n {
                    let d = d_uk + dist[k * n + v];
                    if d < dist[u * n + v] {
                        dist[u * n + v] = d;
                        pred[u * n + v] = pred[k * n + v];
                    }
                }
            }
        }

        Self { n, dist, pred }
    }

    fn dist(&self, u: usize, v: usize) -> f64 {
        self.dist[u * self.n + v]
    }

    /// Node indices from `source` to `target`, both inclusive. Empty when
    /// `target` is unreachable.
    fn path(&self, source: usize, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut cur = target;
        while cur != source {
            match self.pred[source * self.n + cur] {
                Some(p) => {
                    path.push(p);
                    cur = p;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}
