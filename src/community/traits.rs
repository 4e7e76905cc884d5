//! Community detection traits.

use crate::error::Result;
use crate::hierarchy::Partition;
use petgraph::graph::UnGraph;

/// Trait for community detection algorithms over petgraph graphs.
pub trait CommunityDetection {
    /// Detect communities in a graph, treating every edge as unit weight.
    ///
    /// Returns a mapping from node index to community ID.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;

    /// Detect communities and group node indices by community.
    fn detect_partition<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Partition> {
        Ok(Partition::from_labels(&self.detect(graph)?))
    }

    /// Get the resolution parameter (if applicable).
    fn resolution(&self) -> f64 {
        1.0
    }
}
