use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dn_backbone::{BackboneExtractor, DiameterPath, SpanningTreeWalk};
use dn_graph::SkeletonGraph;

/// Long trunk with a short spine hanging off every node and a shortcut loop
/// every tenth node.
fn synthetic_skeleton(trunk: u64) -> SkeletonGraph {
    let mut g = SkeletonGraph::new();
    for i in 0..trunk {
        g.add_edge(i, i + 1, 1.0 + (i % 3) as f64);
        g.add_edge(i, 100_000 + i, 0.5);
        if i % 10 == 0 && i + 5 <= trunk {
            g.add_edge(i, i + 5, 7.5);
        }
    }
    g
}

fn bench_diameter(c: &mut Criterion) {
    let g = synthetic_skeleton(200);

    c.bench_function("dn_backbone_diameter_200", |b| {
        b.iter(|| {
            let backbone = DiameterPath.extract(black_box(&g));
            black_box(backbone.node_count());
        });
    });
}

fn bench_spanning_tree(c: &mut Criterion) {
    let g = synthetic_skeleton(5_000);

    c.bench_function("dn_backbone_spanning_tree_5k", |b| {
        b.iter(|| {
            let backbone = SpanningTreeWalk.extract(black_box(&g));
            black_box(backbone.node_count());
        });
    });
}

criterion_group!(benches, bench_diameter, bench_spanning_tree);
criterion_main!(benches);
