//! Per-round partitions produced by the multi-level driver.

use super::partition::Partition;
#[cfg(feature = "serde")]
use crate::error::{Error, Result};

/// One recorded round of the driver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// Communities of this round, in original node ids.
    pub partition: Partition,
    /// Modularity of `partition` on the original graph.
    pub modularity: f64,
    /// Number of (super-)nodes local moving ran on.
    pub node_count: usize,
    /// Local moving passes, including the final pass with no moves.
    pub passes: usize,
}

/// Nested partitions, finest first.
///
/// Each level merges whole communities of the level before it, and each
/// level has strictly higher modularity than the one before.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHierarchy"))]
pub struct Hierarchy {
    n_nodes: usize,
    levels: Vec<Level>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHierarchy {
    n_nodes: usize,
    levels: Vec<Level>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHierarchy> for Hierarchy {
    type Error = Error;

    /// Loaded hierarchies need at least one level, each covering `n_nodes`.
    fn try_from(raw: RawHierarchy) -> Result<Self> {
        if raw.levels.is_empty() {
            return Err(Error::EmptyInput);
        }
        for level in &raw.levels {
            if level.partition.node_count() != raw.n_nodes {
                return Err(Error::LengthMismatch {
                    expected: raw.n_nodes,
                    found: level.partition.node_count(),
                });
            }
        }
        Ok(Self::new(raw.n_nodes, raw.levels))
    }
}

impl Hierarchy {
    /// `levels` must be non-empty.
    pub(crate) fn new(n_nodes: usize, levels: Vec<Level>) -> Self {
        debug_assert!(!levels.is_empty());
        Self { n_nodes, levels }
    }

    /// Number of original nodes.
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Number of recorded levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// All levels, finest first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Level `idx`, if recorded.
    pub fn level(&self, idx: usize) -> Option<&Level> {
        self.levels.get(idx)
    }

    /// The coarsest level.
    pub fn final_level(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    /// The coarsest partition.
    pub fn final_partition(&self) -> &Partition {
        &self.final_level().partition
    }

    /// Modularity of the coarsest partition.
    pub fn modularity(&self) -> f64 {
        self.final_level().modularity
    }

    /// Modularity of each level, finest first.
    pub fn modularities(&self) -> Vec<f64> {
        self.levels.iter().map(|l| l.modularity).collect()
    }

    /// Per-node labels at level `idx`.
    pub fn labels_at(&self, idx: usize) -> Option<&[usize]> {
        self.level(idx).map(|l| l.partition.labels())
    }

    /// Consume into the coarsest partition and its modularity.
    pub fn into_final(mut self) -> (Partition, f64) {
        let last = self.levels.len() - 1;
        let level = self.levels.swap_remove(last);
        (level.partition, level.modularity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hierarchy {
        let fine = Level {
            partition: Partition::from_labels(&[0, 0, 1, 1, 2, 2]),
            modularity: 0.2,
            node_count: 6,
            passes: 3,
        };
        let coarse = Level {
            partition: Partition::from_labels(&[0, 0, 0, 0, 1, 1]),
            modularity: 0.3,
            node_count: 3,
            passes: 2,
        };
        Hierarchy::new(6, vec![fine, coarse])
    }

    #[test]
    fn final_level_is_last() {
        let h = sample();
        assert_eq!(h.depth(), 2);
        assert_eq!(h.final_partition().len(), 2);
        assert_eq!(h.modularity(), 0.3);
        assert_eq!(h.modularities(), vec![0.2, 0.3]);
        assert_eq!(h.labels_at(0), Some(&[0, 0, 1, 1, 2, 2][..]));
        assert!(h.level(2).is_none());
    }

    #[test]
    fn into_final_returns_coarsest() {
        let (partition, q) = sample().into_final();
        assert_eq!(partition.communities(), &[vec![0, 1, 2, 3], vec![4, 5]]);
        assert_eq!(q, 0.3);
    }
}
