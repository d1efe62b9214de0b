use dn_backbone::Backbone;
use dn_core::{Error, Result};
use dn_graph::{PositionMap, SkeletonGraph};

use crate::record::{StructureKind, TreeRecord};

/// Re-expresses `graph` as a rooted tree anchored on `backbone`.
///
/// The backbone root is emitted first with no parent, then every trunk edge's
/// child in backbone order. Right after each trunk node, all nodes reachable
/// from it through unclaimed non-trunk nodes are emitted depth-first as
/// spines. Neighbours are visited in graph adjacency order. A node already
/// claimed is never revisited, which breaks skeleton loops at the edge that
/// would have closed them.
///
/// Fails when a node has no position, when the backbone names a node outside
/// the graph, or when some node cannot be reached from the backbone.
pub fn convert_to_tree(
    graph: &SkeletonGraph,
    backbone: &Backbone,
    positions: &PositionMap,
    radius: f64,
) -> Result<Vec<TreeRecord>> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    let root = backbone.root().ok_or(Error::EmptyBackbone)?;

    let mut conv = TreeConverter::new(graph, positions, radius);
    for id in backbone.nodes() {
        let idx = graph.index_of(id).ok_or(Error::UnknownNode(id))?;
        conv.on_trunk[idx] = true;
    }

    let root_idx = graph.index_of(root).ok_or(Error::UnknownNode(root))?;
    conv.claim(root_idx, StructureKind::Trunk, None)?;
    conv.attach_spines(root_idx)?;

    for &(parent, child) in backbone.edges() {
        let child_idx = graph.index_of(child).ok_or(Error::UnknownNode(child))?;
        if conv.mapping[child_idx].is_some() {
            continue;
        }
        let parent_id = graph
            .index_of(parent)
            .and_then(|i| conv.mapping[i])
            .ok_or(Error::DetachedTrunkEdge { parent, child })?;

        conv.claim(child_idx, StructureKind::Trunk, Some(parent_id))?;
        conv.attach_spines(child_idx)?;
    }

    if let Some(idx) = conv.mapping.iter().position(Option::is_none) {
        return Err(Error::Unreachable(graph.node_at(idx)));
    }

    Ok(conv.out)
}

/// State of one conversion: the node mapping (dense graph index to emitted
/// id), trunk membership and the id counter.
struct TreeConverter<'a> {
    graph: &'a SkeletonGraph,
    positions: &'a PositionMap,
    radius: f64,
    mapping: Vec<Option<usize>>,
    on_trunk: Vec<bool>,
    next_id: usize,
    out: Vec<TreeRecord>,
}

impl<'a> TreeConverter<'a> {
    fn new(graph: &'a SkeletonGraph, positions: &'a PositionMap, radius: f64) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            positions,
            radius,
            mapping: vec![None; n],
            on_trunk: vec![false; n],
            next_id: 1,
            out: Vec::with_capacity(n),
        }
    }

    fn is_unclaimed_spine(&self, idx: usize) -> bool {
        !self.on_trunk[idx] && self.mapping[idx].is_none()
    }

    fn claim(&mut self, idx: usize, kind: StructureKind, parent: Option<usize>) -> Result<usize> {
        let coord = self.positions.require(self.graph.node_at(idx))?;
        let id = self.next_id;
        self.next_id += 1;
        self.mapping[idx] = Some(id);
        self.out.push(TreeRecord {
            id,
            kind,
            coord,
            radius: self.radius,
            parent,
        });
        Ok(id)
    }

    /// Emits the spine subtree hanging off the already claimed node `start`.
    /// Pre-order with an explicit stack of `(node, next neighbour slot)`.
    fn attach_spines(&mut self, start: usize) -> Result<()> {
        let graph = self.graph;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some(&(node, cursor)) = stack.last() {
            let neighbors = graph.neighbors_at(node);
            let next = neighbors[cursor..]
                .iter()
                .position(|&(n, _)| self.is_unclaimed_spine(n));

            let Some(offset) = next else {
                stack.pop();
                continue;
            };

            let child = neighbors[cursor + offset].0;
            if let Some(top) = stack.last_mut() {
                top.1 = cursor + offset + 1;
            }

            let parent_id = self.mapping[node];
            self.claim(child, StructureKind::Spine, parent_id)?;
            stack.push((child, 0));
        }

        Ok(())
    }
}
