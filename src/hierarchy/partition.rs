//! Flat partition of the original nodes.

use crate::error::{Error, Result};

/// An ordered list of communities covering nodes `0..n` exactly once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPartition"))]
pub struct Partition {
    communities: Vec<Vec<usize>>,
    /// labels[i] = index of the community holding node i
    labels: Vec<usize>,
}

/// Serialized form; labels are rebuilt from the communities on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPartition {
    communities: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPartition> for Partition {
    type Error = Error;

    fn try_from(raw: RawPartition) -> Result<Self> {
        let n = raw.communities.iter().map(Vec::len).sum();
        Self::from_communities(n, raw.communities)
    }
}

impl Partition {
    /// Every node in its own community.
    pub fn singletons(n: usize) -> Self {
        Self {
            communities: (0..n).map(|i| vec![i]).collect(),
            labels: (0..n).collect(),
        }
    }

    /// Build from community lists over nodes `0..n`.
    ///
    /// Empty lists are dropped. Order is kept, both of communities and of
    /// nodes inside each community.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeOutOfRange`] if a node is `>= n`.
    /// - [`Error::InvalidPartition`] if a node is listed twice or not at all.
    pub fn from_communities(n: usize, communities: Vec<Vec<usize>>) -> Result<Self> {
        let communities: Vec<Vec<usize>> =
            communities.into_iter().filter(|c| !c.is_empty()).collect();

        let mut labels: Vec<Option<usize>> = vec![None; n];
        for (idx, community) in communities.iter().enumerate() {
            for &node in community {
                let slot = labels
                    .get_mut(node)
                    .ok_or(Error::NodeOutOfRange { node, n_nodes: n })?;
                if slot.is_some() {
                    return Err(Error::InvalidPartition {
                        node,
                        reason: "node appears in more than one community",
                    });
                }
                *slot = Some(idx);
            }
        }

        let labels = labels
            .into_iter()
            .enumerate()
            .map(|(node, label)| {
                label.ok_or(Error::InvalidPartition {
                    node,
                    reason: "node is not in any community",
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self {
            communities,
            labels,
        })
    }

    /// Group nodes by label; communities are ordered by first appearance.
    pub fn from_labels(labels: &[usize]) -> Self {
        let (dense, k) = crate::community::renumber(labels);
        let mut communities = vec![Vec::new(); k];
        for (node, &c) in dense.iter().enumerate() {
            communities[c].push(node);
        }
        Self {
            communities,
            labels: dense,
        }
    }

    /// Number of communities.
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Whether there are no communities (only for zero nodes).
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Number of nodes covered.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// The communities, in order.
    pub fn communities(&self) -> &[Vec<usize>] {
        &self.communities
    }

    /// Members of community `idx`.
    pub fn community(&self, idx: usize) -> Option<&[usize]> {
        self.communities.get(idx).map(Vec::as_slice)
    }

    /// Index of the community holding `node`.
    pub fn community_of(&self, node: usize) -> Option<usize> {
        self.labels.get(node).copied()
    }

    /// Dense per-node labels.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Size of each community.
    pub fn sizes(&self) -> Vec<usize> {
        self.communities.iter().map(Vec::len).collect()
    }

    /// Iterate over `(index, members)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.communities
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.as_slice()))
    }

    /// Consume into the community lists.
    pub fn into_communities(self) -> Vec<Vec<usize>> {
        self.communities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_communities_builds_labels() {
        let p = Partition::from_communities(5, vec![vec![3, 1], vec![], vec![0, 2, 4]]).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.labels(), &[1, 0, 1, 0, 1]);
        assert_eq!(p.community(0), Some(&[3, 1][..]));
        assert_eq!(p.sizes(), vec![2, 3]);
    }

    #[test]
    fn rejects_duplicates_and_gaps() {
        assert_eq!(
            Partition::from_communities(3, vec![vec![0, 1], vec![1, 2]]),
            Err(Error::InvalidPartition {
                node: 1,
                reason: "node appears in more than one community"
            })
        );
        assert_eq!(
            Partition::from_communities(3, vec![vec![0, 2]]),
            Err(Error::InvalidPartition {
                node: 1,
                reason: "node is not in any community"
            })
        );
        assert_eq!(
            Partition::from_communities(2, vec![vec![0, 1, 2]]),
            Err(Error::NodeOutOfRange { node: 2, n_nodes: 2 })
        );
    }

    #[test]
    fn from_labels_orders_by_first_appearance() {
        let p = Partition::from_labels(&[7, 7, 3, 7, 3, 9]);
        assert_eq!(p.communities(), &[vec![0, 1, 3], vec![2, 4], vec![5]]);
        assert_eq!(p.community_of(4), Some(1));
        assert_eq!(p.community_of(6), None);
    }

    #[test]
    fn singletons_cover_every_node() {
        let p = Partition::singletons(3);
        assert_eq!(p.len(), 3);
        assert_eq!(p.iter().map(|(_, c)| c.len()).sum::<usize>(), 3);
        assert!(Partition::singletons(0).is_empty());
    }
}
