//! Phase 2: contract communities into super-nodes.
//!
//! Community ids are renumbered densely in order of first appearance over
//! the node sequence. Edge weights between two communities are summed into
//! one edge; weights inside a community, old self-loops included, are summed
//! into one self-loop on the new node.

use crate::error::{Error, Result};
use crate::graph::{Edge, WeightedGraph};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A contracted graph and the old nodes behind each new node.
#[derive(Debug, Clone)]
pub struct Aggregate {
    /// One node per community.
    pub graph: WeightedGraph,
    /// `members[c]` lists the old node ids merged into new node `c`, ascending.
    pub members: Vec<Vec<usize>>,
}

/// Renumber arbitrary community ids to `0..k` in first-seen order.
///
/// Returns the dense labels and `k`.
pub fn renumber(assignment: &[usize]) -> (Vec<usize>, usize) {
    let mut dense: HashMap<usize, usize> = HashMap::new();
    let labels = assignment
        .iter()
        .map(|&c| {
            let next = dense.len();
            *dense.entry(c).or_insert(next)
        })
        .collect();
    (labels, dense.len())
}

/// Contract `graph` according to `assignment`.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `assignment` does not cover every node.
pub fn aggregate(graph: &WeightedGraph, assignment: &[usize]) -> Result<Aggregate> {
    if assignment.len() != graph.node_count() {
        return Err(Error::LengthMismatch {
            expected: graph.node_count(),
            found: assignment.len(),
        });
    }

    let (labels, k) = renumber(assignment);

    let mut members = vec![Vec::new(); k];
    for (node, &c) in labels.iter().enumerate() {
        members[c].push(node);
    }

    // (low, high) community pair -> summed weight, in first-seen order
    let mut weights: IndexMap<(usize, usize), f64> = IndexMap::new();
    for e in graph.edges() {
        let (a, b) = (labels[e.source], labels[e.target]);
        let key = if a <= b { (a, b) } else { (b, a) };
        *weights.entry(key).or_insert(0.0) += e.weight;
    }

    let edges = weights
        .into_iter()
        .map(|((source, target), weight)| Edge {
            source,
            target,
            weight,
        })
        .collect();

    Ok(Aggregate {
        graph: WeightedGraph::from_checked_edges(k, edges),
        members,
    })
}
