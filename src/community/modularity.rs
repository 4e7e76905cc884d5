//! Modularity of a partition.
//!
//! ```text
//! Q = Σ_c [ sigma_in[c] / 2m − γ (sigma_tot[c] / 2m)² ]
//! ```
//!
//! With γ = 1 this is Newman–Girvan modularity.

use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use indexmap::IndexMap;

/// Modularity from per-community aggregates.
///
/// `m` is the total edge weight of the original graph. Returns `0.0` when
/// `m` is not positive.
pub fn modularity_from_aggregates(
    sigma_in: &[f64],
    sigma_tot: &[f64],
    m: f64,
    resolution: f64,
) -> f64 {
    if m <= 0.0 {
        return 0.0;
    }
    let two_m = 2.0 * m;
    sigma_in
        .iter()
        .zip(sigma_tot)
        .map(|(&inner, &total)| {
            let share = total / two_m;
            inner / two_m - resolution * share * share
        })
        .sum()
}

/// Modularity of `labels` on `graph`, computed from scratch.
///
/// `labels[i]` is the community of node `i`; ids need not be dense.
///
/// # Errors
///
/// [`Error::LengthMismatch`] if `labels` does not have one entry per node.
pub fn modularity(graph: &WeightedGraph, labels: &[usize], resolution: f64) -> Result<f64> {
    if labels.len() != graph.node_count() {
        return Err(Error::LengthMismatch {
            expected: graph.node_count(),
            found: labels.len(),
        });
    }

    // community -> (sigma_in, sigma_tot)
    let mut aggregates: IndexMap<usize, (f64, f64)> = IndexMap::new();
    for (node, &label) in labels.iter().enumerate() {
        aggregates.entry(label).or_insert((0.0, 0.0)).1 += graph.degree(node);
    }
    for e in graph.edges() {
        let label = labels[e.source];
        if label == labels[e.target] {
            if let Some(entry) = aggregates.get_mut(&label) {
                entry.0 += 2.0 * e.weight;
            }
        }
    }

    let (sigma_in, sigma_tot): (Vec<f64>, Vec<f64>) = aggregates.into_values().unzip();
    Ok(modularity_from_aggregates(
        &sigma_in,
        &sigma_tot,
        graph.total_weight(),
        resolution,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> WeightedGraph {
        WeightedGraph::from_unweighted(
            6,
            [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)],
        )
        .unwrap()
    }

    #[test]
    fn matches_petgraph_reference_value() {
        // a-b-c triangle, d-e-f triangle, bridge b-d
        let g = WeightedGraph::from_unweighted(
            6,
            [(0, 1), (1, 2), (2, 0), (3, 1), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();
        let q = modularity(&g, &[1, 1, 1, 0, 0, 0], 1.0).unwrap();
        assert!((q - 0.357_142_857_142_857_1).abs() < 1e-12);
    }

    #[test]
    fn single_community_has_zero_modularity() {
        let g = two_triangles();
        let q = modularity(&g, &[0; 6], 1.0).unwrap();
        assert!(q.abs() < 1e-12);
    }

    #[test]
    fn singletons_are_negative() {
        let g = two_triangles();
        let labels: Vec<usize> = (0..6).collect();
        assert!(modularity(&g, &labels, 1.0).unwrap() < 0.0);
    }

    #[test]
    fn higher_resolution_lowers_score() {
        let g = two_triangles();
        let labels = [0, 0, 0, 1, 1, 1];
        let q1 = modularity(&g, &labels, 1.0).unwrap();
        let q2 = modularity(&g, &labels, 2.0).unwrap();
        assert!(q2 < q1);
    }

    #[test]
    fn aggregates_are_pure() {
        let sigma_in = [6.0, 6.0];
        let sigma_tot = [7.0, 7.0];
        let a = modularity_from_aggregates(&sigma_in, &sigma_tot, 7.0, 1.0);
        let b = modularity_from_aggregates(&sigma_in, &sigma_tot, 7.0, 1.0);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((a - 5.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_is_zero() {
        assert_eq!(modularity_from_aggregates(&[0.0], &[0.0], 0.0, 1.0), 0.0);
    }

    #[test]
    fn rejects_wrong_label_count() {
        let g = two_triangles();
        assert_eq!(
            modularity(&g, &[0, 0], 1.0),
            Err(Error::LengthMismatch {
                expected: 6,
                found: 2
            })
        );
    }
}
