//! Branch graph construction from skeleton branch records.
//!
//! - Nodes are skeleton junctions and endpoints, keyed by their upstream id.
//! - Each branch record contributes one undirected weighted edge; repeated
//!   ids merge into the same node, a repeated node pair overwrites the weight.
//! - Node order and per-node adjacency order follow first appearance in the
//!   record sequence. Every traversal downstream relies on this order for
//!   reproducible output.
//!
//! Positions are indexed separately by [`build_positions`] so that a graph can
//! be analysed without coordinates.

mod build;
mod graph;
mod positions;

pub use build::build_graph;
pub use graph::SkeletonGraph;
pub use positions::{PositionMap, build_positions};
