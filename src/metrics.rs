//! Agreement between two labelings of the same nodes.
//!
//! Used to score detected communities against a known (planted) partition.
//!
//! | Metric | Range | Best |
//! |--------|-------|------|
//! | [`nmi`] | [0, 1] | 1 |
//! | [`ari`] | [-1, 1] | 1 |
//!
//! # Example
//!
//! ```rust
//! use cohort::metrics::{ari, nmi};
//!
//! let pred = [0, 0, 1, 1, 2, 2];
//! let truth = [0, 0, 0, 1, 1, 1];
//!
//! assert!(nmi(&pred, &truth) < 1.0);
//! assert!(ari(&pred, &truth) < 1.0);
//! ```
//!
//! # References
//!
//! - Hubert & Arabie (1985). "Comparing partitions" (ARI)
//! - Strehl & Ghosh (2002). "Cluster ensembles" (NMI)

use std::collections::HashMap;

/// Normalized Mutual Information between two labelings.
///
/// ```text
/// NMI(U, V) = 2 * I(U; V) / (H(U) + H(V))
/// ```
///
/// Returns `0.0` for empty or mismatched inputs and `1.0` when both
/// labelings are constant.
///
/// ```rust
/// use cohort::metrics::nmi;
///
/// assert!((nmi(&[0, 0, 1, 1], &[5, 5, 7, 7]) - 1.0).abs() < 1e-12);
/// assert!(nmi(&[0, 1, 0, 1], &[0, 0, 1, 1]) < 0.5);
/// ```
pub fn nmi(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }
    let n = pred.len() as f64;
    let table = Contingency::new(pred, truth);

    let entropy = |counts: &HashMap<usize, usize>| -> f64 {
        counts
            .values()
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.ln()
            })
            .sum()
    };
    let h_pred = entropy(&table.rows);
    let h_truth = entropy(&table.cols);

    let mut mi = 0.0;
    for (&(p, t), &count) in &table.joint {
        let p_joint = count as f64 / n;
        let p_p = table.rows[&p] as f64 / n;
        let p_t = table.cols[&t] as f64 / n;
        mi += p_joint * (p_joint / (p_p * p_t)).ln();
    }

    let denom = h_pred + h_truth;
    if denom > 0.0 {
        (2.0 * mi / denom).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Adjusted Rand Index between two labelings.
///
/// 0 indicates chance-level agreement, 1 perfect agreement. Returns `0.0`
/// for empty or mismatched inputs.
///
/// ```rust
/// use cohort::metrics::ari;
///
/// assert!((ari(&[0, 0, 1, 1], &[1, 1, 0, 0]) - 1.0).abs() < 1e-12);
/// ```
pub fn ari(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }
    let table = Contingency::new(pred, truth);

    let sum_comb_ij: f64 = table.joint.values().map(|&c| comb2(c)).sum();
    let sum_comb_a: f64 = table.rows.values().map(|&c| comb2(c)).sum();
    let sum_comb_b: f64 = table.cols.values().map(|&c| comb2(c)).sum();
    let comb_n = comb2(pred.len());

    if comb_n == 0.0 {
        return 1.0;
    }
    let expected = sum_comb_a * sum_comb_b / comb_n;
    let max_index = (sum_comb_a + sum_comb_b) / 2.0;

    let denom = max_index - expected;
    if denom.abs() < 1e-10 {
        return 1.0;
    }
    (sum_comb_ij - expected) / denom
}

/// Joint and marginal label counts.
struct Contingency {
    joint: HashMap<(usize, usize), usize>,
    rows: HashMap<usize, usize>,
    cols: HashMap<usize, usize>,
}

impl Contingency {
    fn new(pred: &[usize], truth: &[usize]) -> Self {
        let mut joint = HashMap::new();
        let mut rows = HashMap::new();
        let mut cols = HashMap::new();
        for (&p, &t) in pred.iter().zip(truth) {
            *joint.entry((p, t)).or_insert(0) += 1;
            *rows.entry(p).or_insert(0) += 1;
            *cols.entry(t).or_insert(0) += 1;
        }
        Self { joint, rows, cols }
    }
}

fn comb2(n: usize) -> f64 {
    if n < 2 {
        0.0
    } else {
        (n * (n - 1) / 2) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabeled_partition_scores_one() {
        let pred = [2, 2, 0, 0, 1, 1];
        let truth = [0, 0, 1, 1, 2, 2];
        assert!((nmi(&pred, &truth) - 1.0).abs() < 1e-12);
        assert!((ari(&pred, &truth) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn split_cluster_scores_below_one() {
        let pred = [0, 0, 1, 1, 2, 2];
        let truth = [0, 0, 0, 0, 1, 1];
        let score = nmi(&pred, &truth);
        assert!(score > 0.5 && score < 1.0);
        assert!(ari(&pred, &truth) < 1.0);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        assert_eq!(nmi(&[0, 1], &[0]), 0.0);
        assert_eq!(ari(&[], &[]), 0.0);
    }

    #[test]
    fn constant_labelings_agree() {
        assert_eq!(nmi(&[3, 3, 3], &[1, 1, 1]), 1.0);
        assert_eq!(ari(&[3, 3, 3], &[1, 1, 1]), 1.0);
    }
}
