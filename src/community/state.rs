//! Community membership with incrementally maintained aggregates.
//!
//! For every community `c` the state keeps
//!
//! ```text
//! sigma_in[c]  = 2 × (weight of edges inside c, self-loops included)
//! sigma_tot[c] = Σ_{i ∈ c} k_i
//! ```
//!
//! alongside an ordered member set and a per-node community index, so the
//! two views of membership can never disagree.

use crate::graph::WeightedGraph;
use indexmap::{IndexMap, IndexSet};

/// Partition of one aggregation level into communities.
///
/// Community ids are the node ids of the level: community `c` starts out as
/// `{c}` and may later be emptied.
#[derive(Debug, Clone)]
pub struct CommunityState {
    assignment: Vec<usize>,
    /// Node currently taken out of its community, if any.
    detached: Option<usize>,
    members: Vec<IndexSet<usize>>,
    sigma_in: Vec<f64>,
    sigma_tot: Vec<f64>,
}

impl CommunityState {
    /// Every node in its own community.
    pub fn singletons(graph: &WeightedGraph) -> Self {
        let n = graph.node_count();
        Self {
            assignment: (0..n).collect(),
            detached: None,
            members: (0..n).map(|i| IndexSet::from([i])).collect(),
            sigma_in: graph.self_loops().iter().map(|w| 2.0 * w).collect(),
            sigma_tot: graph.degrees().to_vec(),
        }
    }

    /// Community of `node`, or `None` while it is detached.
    pub fn community_of(&self, node: usize) -> Option<usize> {
        if self.detached == Some(node) {
            None
        } else {
            Some(self.assignment[node])
        }
    }

    /// Summed edge weight from `node` to each neighbouring community.
    ///
    /// Communities appear in the order their first neighbour is enumerated
    /// by [`WeightedGraph::neighbors`]. Self-loops are not counted.
    pub fn neighbor_weights(&self, graph: &WeightedGraph, node: usize) -> IndexMap<usize, f64> {
        let mut links = IndexMap::new();
        for (neighbor, weight) in graph.neighbors(node) {
            *links.entry(self.assignment[neighbor]).or_insert(0.0) += weight;
        }
        links
    }

    /// Take `node` out of its community.
    ///
    /// `k_in` is the edge weight from `node` to the other members. Returns
    /// the community the node left.
    pub fn remove(&mut self, graph: &WeightedGraph, node: usize, k_in: f64) -> usize {
        debug_assert!(self.detached.is_none(), "a node is already detached");
        let comm = self.assignment[node];
        let removed = self.members[comm].shift_remove(&node);
        debug_assert!(removed, "node {node} missing from community {comm}");

        self.sigma_tot[comm] -= graph.degree(node);
        self.sigma_in[comm] -= 2.0 * (k_in + graph.self_loop(node));
        self.detached = Some(node);
        comm
    }

    /// Put the detached `node` into `comm`; `k_in` is its edge weight to `comm`.
    pub fn insert(&mut self, graph: &WeightedGraph, node: usize, comm: usize, k_in: f64) {
        debug_assert_eq!(self.detached, Some(node), "inserting a node that was not removed");
        let fresh = self.members[comm].insert(node);
        debug_assert!(fresh, "node {node} already in community {comm}");

        self.sigma_tot[comm] += graph.degree(node);
        self.sigma_in[comm] += 2.0 * (k_in + graph.self_loop(node));
        self.assignment[node] = comm;
        self.detached = None;
    }

    /// Members of `comm`, in the order they joined.
    pub fn members(&self, comm: usize) -> impl Iterator<Item = usize> + '_ {
        self.members[comm].iter().copied()
    }

    /// Twice the internal weight of each community.
    pub fn sigma_in(&self) -> &[f64] {
        &self.sigma_in
    }

    /// Total degree of each community.
    pub fn sigma_tot(&self) -> &[f64] {
        &self.sigma_tot
    }

    /// Per-node community ids (sparse, not renumbered).
    pub fn labels(&self) -> &[usize] {
        debug_assert!(self.detached.is_none());
        &self.assignment
    }

    /// Ids of non-empty communities, ascending.
    pub fn communities(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_empty())
            .map(|(c, _)| c)
    }

    /// Number of non-empty communities.
    pub fn community_count(&self) -> usize {
        self.communities().count()
    }
}
