//! Weighted undirected graph used at every aggregation level.
//!
//! Nodes are dense ids `0..n`. Each edge is stored once; the incidence index
//! lists it under both endpoints, except self-loops which are listed once.
//!
//! Derived statistics follow the usual weighted-modularity conventions:
//!
//! ```text
//! k_i = Σ_{e ∋ i} w_e    (a self-loop on i contributes 2 w_e)
//! w_i = Σ_{e = (i,i)} w_e
//! m   = Σ_e w_e
//! ```

use crate::error::{Error, Result};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// First endpoint, as supplied.
    pub source: usize,
    /// Second endpoint, as supplied.
    pub target: usize,
    /// Non-negative weight.
    pub weight: f64,
}

impl Edge {
    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// The endpoint opposite `node`.
    fn other(&self, node: usize) -> usize {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// Weighted graph with a precomputed incidence index, degrees and self-loops.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    n: usize,
    edges: Vec<Edge>,
    /// node -> indices into `edges`
    incidence: Vec<Vec<usize>>,
    degrees: Vec<f64>,
    self_loops: Vec<f64>,
    total_weight: f64,
}

impl WeightedGraph {
    /// Build a graph over nodes `0..n_nodes` from `(u, v, weight)` triples.
    ///
    /// Parallel edges are kept as separate entries; they behave exactly as a
    /// single edge carrying the summed weight.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeOutOfRange`] if an endpoint is `>= n_nodes`.
    /// - [`Error::InvalidWeight`] if a weight is negative, NaN or infinite.
    pub fn new<I>(n_nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut stored = Vec::new();
        for (idx, (u, v, weight)) in edges.into_iter().enumerate() {
            for node in [u, v] {
                if node >= n_nodes {
                    return Err(Error::NodeOutOfRange {
                        node,
                        n_nodes,
                    });
                }
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight { edge: idx, weight });
            }
            stored.push(Edge {
                source: u,
                target: v,
                weight,
            });
        }
        Ok(Self::from_checked_edges(n_nodes, stored))
    }

    /// Build a graph where every pair carries unit weight.
    pub fn from_unweighted<I>(n_nodes: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::new(n_nodes, pairs.into_iter().map(|(u, v)| (u, v, 1.0)))
    }

    /// Convert a petgraph undirected graph, reading weights with `weight`.
    pub fn from_petgraph<N, E, F>(graph: &UnGraph<N, E>, mut weight: F) -> Result<Self>
    where
        F: FnMut(&E) -> f64,
    {
        let edges: Vec<(usize, usize, f64)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), weight(e.weight())))
            .collect();
        Self::new(graph.node_count(), edges)
    }

    /// Convert a petgraph undirected graph, giving every edge unit weight.
    pub fn from_unweighted_petgraph<N, E>(graph: &UnGraph<N, E>) -> Result<Self> {
        Self::from_petgraph(graph, |_| 1.0)
    }

    /// Recompute the incidence index and node statistics for validated edges.
    pub(crate) fn from_checked_edges(n: usize, edges: Vec<Edge>) -> Self {
        let mut incidence = vec![Vec::new(); n];
        let mut degrees = vec![0.0; n];
        let mut self_loops = vec![0.0; n];
        let mut total_weight = 0.0;

        for (idx, e) in edges.iter().enumerate() {
            total_weight += e.weight;
            degrees[e.source] += e.weight;
            degrees[e.target] += e.weight;
            incidence[e.source].push(idx);
            if e.is_self_loop() {
                self_loops[e.source] += e.weight;
            } else {
                incidence[e.target].push(idx);
            }
        }

        Self {
            n,
            edges,
            incidence,
            degrees,
            self_loops,
            total_weight,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of stored edges (self-loops included).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident(&self, node: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence[node].iter().map(move |&idx| &self.edges[idx])
    }

    /// Non-self-loop neighbours of `node` with the connecting edge weight.
    ///
    /// Edges where `node` is the first endpoint come first, then edges where
    /// it is the second; each group keeps insertion order. This order decides
    /// ties during local moving.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let as_source = self
            .incident(node)
            .filter(move |e| !e.is_self_loop() && e.source == node);
        let as_target = self
            .incident(node)
            .filter(move |e| !e.is_self_loop() && e.target == node);
        as_source
            .chain(as_target)
            .map(move |e| (e.other(node), e.weight))
    }

    /// Weighted degree `k_i` of `node`.
    pub fn degree(&self, node: usize) -> f64 {
        self.degrees[node]
    }

    /// All weighted degrees.
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Self-loop weight `w_i` of `node`.
    pub fn self_loop(&self, node: usize) -> f64 {
        self.self_loops[node]
    }

    /// All self-loop weights.
    pub fn self_loops(&self) -> &[f64] {
        &self.self_loops
    }

    /// Total edge weight `m`.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_with_loop() -> WeightedGraph {
        // 0 - 1 - 2, plus a self-loop on 1
        WeightedGraph::new(3, [(0, 1, 1.0), (1, 2, 2.0), (1, 1, 0.5)]).unwrap()
    }

    #[test]
    fn degrees_count_self_loops_twice() {
        let g = path_with_loop();
        assert_eq!(g.degrees(), &[1.0, 4.0, 2.0]);
        assert_eq!(g.self_loops(), &[0.0, 0.5, 0.0]);
        assert_eq!(g.total_weight(), 3.5);
    }

    #[test]
    fn self_loop_listed_once_in_incidence() {
        let g = path_with_loop();
        assert_eq!(g.incident(1).count(), 3);
        assert_eq!(g.incident(1).filter(|e| e.is_self_loop()).count(), 1);
    }

    #[test]
    fn neighbors_skip_self_loops_and_list_sources_first() {
        let g = WeightedGraph::new(4, [(3, 0, 1.0), (0, 2, 1.0), (0, 0, 4.0), (1, 0, 1.0)])
            .unwrap();
        let ns: Vec<usize> = g.neighbors(0).map(|(n, _)| n).collect();
        assert_eq!(ns, vec![2, 3, 1]);
    }

    #[test]
    fn rejects_out_of_range_node() {
        let err = WeightedGraph::new(2, [(0, 2, 1.0)]).unwrap_err();
        assert_eq!(err, Error::NodeOutOfRange { node: 2, n_nodes: 2 });
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        assert!(matches!(
            WeightedGraph::new(2, [(0, 1, -1.0)]),
            Err(Error::InvalidWeight { edge: 0, .. })
        ));
        assert!(matches!(
            WeightedGraph::new(2, [(0, 1, 1.0), (0, 1, f64::NAN)]),
            Err(Error::InvalidWeight { edge: 1, .. })
        ));
    }

    #[test]
    fn unweighted_pairs_get_unit_weight() {
        let g = WeightedGraph::from_unweighted(3, [(0, 1), (1, 2)]).unwrap();
        assert!(g.edges().iter().all(|e| e.weight == 1.0));
        assert_eq!(g.total_weight(), 2.0);
    }

    #[test]
    fn from_petgraph_keeps_every_edge() {
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(b, a, 2.0);
        graph.add_edge(b, c, 3.0);

        let g = WeightedGraph::from_petgraph(&graph, |w| *w).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degrees(), &[2.0, 5.0, 3.0]);

        let unit = WeightedGraph::from_unweighted_petgraph(&graph).unwrap();
        assert_eq!(unit.total_weight(), 2.0);
    }
}
