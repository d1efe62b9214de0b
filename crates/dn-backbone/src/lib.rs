//! Backbone extraction: choosing the trunk of a dendrite skeleton.
//!
//! Two interchangeable strategies implement [`BackboneExtractor`]:
//! - [`DiameterPath`]: the longest shortest path between branch points.
//! - [`SpanningTreeWalk`]: depth-first tree edges of a minimum spanning tree
//!   over the branch-point core. The result may fork.
//!
//! Both only consider nodes of degree greater than one, so skeleton endpoints
//! always end up as spine tips. A short or empty [`Backbone`] is a normal
//! result; callers decide whether it is usable.

mod backbone;
mod diameter;
mod spanning;

use core::fmt;

use dn_graph::SkeletonGraph;
use serde::{Deserialize, Serialize};

pub use backbone::Backbone;
pub use diameter::DiameterPath;
pub use spanning::SpanningTreeWalk;

pub trait BackboneExtractor {
    fn extract(&self, graph: &SkeletonGraph) -> Backbone;
}

/// Configuration-level strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Diameter,
    SpanningTree,
}

impl Strategy {
    pub fn extractor(self) -> &'static dyn BackboneExtractor {
        match self {
            Self::Diameter => &DiameterPath,
            Self::SpanningTree => &SpanningTreeWalk,
        }
    }

    pub fn extract(self, graph: &SkeletonGraph) -> Backbone {
        self.extractor().extract(graph)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diameter => write!(f, "diameter"),
            Self::SpanningTree => write!(f, "spanning-tree"),
        }
    }
}

#[cfg(test)]
mod tests {
    use dn_graph::SkeletonGraph;

    use super::Strategy;

    #[test]
    fn selector_dispatches_to_both_strategies() {
        let mut g = SkeletonGraph::new();
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (3, 6)] {
            g.add_edge(a, b, 1.0);
        }

        let by_diameter = Strategy::Diameter.extract(&g);
        assert_eq!(by_diameter.nodes().collect::<Vec<_>>(), vec![2, 3, 4]);

        let by_tree = Strategy::SpanningTree.extract(&g);
        assert_eq!(by_tree.node_count(), 1);
    }

    #[test]
    fn display_matches_cli_names() {
        assert_eq!(Strategy::Diameter.to_string(), "diameter");
        assert_eq!(Strategy::SpanningTree.to_string(), "spanning-tree");
    }
}
