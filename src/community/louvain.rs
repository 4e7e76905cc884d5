//! Multi-level driver for modularity optimisation.
//!
//! Each round runs [`local_moving`] on the current graph, contracts the
//! resulting communities with [`aggregate`], and projects the partition back
//! onto the original nodes as a new [`Level`]. The next round starts from
//! the contracted graph, where every super-node carries its community's
//! internal weight as a self-loop.
//!
//! The total weight `m` of the input graph normalises every level; it is
//! not recomputed on the meta-graphs (aggregation conserves it anyway).
//!
//! ## Stopping
//!
//! A round ends the run when it moves no node, or when it improves
//! modularity by no more than `tolerance`. `max_levels` bounds the number of
//! rounds and `max_passes` the passes of a single local moving phase;
//! hitting either is reported as [`Error::ConvergenceFailure`].
//!
//! ## References
//!
//! Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! Journal of Statistical Mechanics: Theory and Experiment, P10008.

use super::aggregation::aggregate;
use super::local_moving::local_moving;
use super::modularity::modularity_from_aggregates;
use super::traits::CommunityDetection;
use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use crate::hierarchy::{Hierarchy, Level, Partition};
use log::{debug, info, warn};
use petgraph::graph::UnGraph;
use std::borrow::Cow;

/// Configuration for a multi-level run.
///
/// Defaults: resolution 1, at most 1000 passes per local moving phase, at
/// most 64 rounds, and rounds must improve modularity by more than `1e-10`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Louvain {
    /// Weight of the null-model term, gamma.
    resolution: f64,
    /// Pass cap for one local moving phase.
    max_passes: usize,
    /// Round cap for the whole run.
    max_levels: usize,
    tolerance: f64,
}

impl Louvain {
    /// Default configuration.
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            max_passes: 1000,
            max_levels: 64,
            tolerance: 1e-10,
        }
    }

    /// Scale the null-model penalty; above 1 favours more, smaller communities.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Fail a round whose local moving still moves nodes after this many passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Fail the run if it has not settled after this many rounds.
    pub fn with_max_levels(mut self, levels: usize) -> Self {
        self.max_levels = levels;
        self
    }

    /// Set the smallest modularity improvement that earns another round.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Maximum local moving passes per level.
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Maximum aggregation levels.
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Minimum modularity improvement to continue.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::InvalidParameter {
                name: "resolution",
                message: "must be finite and positive",
            });
        }
        if self.max_passes == 0 {
            return Err(Error::InvalidParameter {
                name: "max_passes",
                message: "must be at least 1",
            });
        }
        if self.max_levels == 0 {
            return Err(Error::InvalidParameter {
                name: "max_levels",
                message: "must be at least 1",
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Run the full multi-level optimisation on `graph`.
    ///
    /// A graph with nodes but no positive edge weight yields a single level
    /// of singletons with modularity `0.0`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for an invalid configuration.
    /// - [`Error::EmptyInput`] if the graph has no nodes.
    /// - [`Error::ConvergenceFailure`] if a pass or level limit is exhausted.
    pub fn run(&self, graph: &WeightedGraph) -> Result<Hierarchy> {
        self.validate()?;

        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let m = graph.total_weight();
        if m <= 0.0 {
            warn!("graph has {} nodes but no edge weight; returning singletons", n);
            let level = Level {
                partition: Partition::singletons(n),
                modularity: 0.0,
                node_count: n,
                passes: 0,
            };
            return Ok(Hierarchy::new(n, vec![level]));
        }

        let mut current = Cow::Borrowed(graph);
        // origin[v] = original nodes represented by node v of `current`
        let mut origin: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut levels: Vec<Level> = Vec::new();

        for depth in 0..self.max_levels {
            let phase = local_moving(&current, m, self.resolution, self.max_passes)?;
            let q = modularity_from_aggregates(
                phase.state.sigma_in(),
                phase.state.sigma_tot(),
                m,
                self.resolution,
            );
            let contracted = aggregate(&current, phase.state.labels())?;

            let communities: Vec<Vec<usize>> = contracted
                .members
                .iter()
                .map(|nodes| nodes.iter().flat_map(|&v| origin[v].iter().copied()).collect())
                .collect();

            info!(
                "level {}: {} nodes -> {} communities, modularity {:.6} ({} passes, {} moves)",
                depth,
                current.node_count(),
                communities.len(),
                q,
                phase.passes,
                phase.moves
            );

            let previous = levels.last().map(|l| l.modularity);
            let improved = match previous {
                None => true,
                Some(p) => phase.moves > 0 && q > p,
            };
            if improved {
                levels.push(Level {
                    partition: Partition::from_communities(n, communities.clone())?,
                    modularity: q,
                    node_count: current.node_count(),
                    passes: phase.passes,
                });
            }

            let settled = match previous {
                None => phase.moves == 0,
                Some(p) => phase.moves == 0 || q - p <= self.tolerance,
            };
            if settled {
                if phase.moves > 0 {
                    debug!("stopping: modularity gain below tolerance {}", self.tolerance);
                }
                return Ok(Hierarchy::new(n, levels));
            }

            origin = communities;
            current = Cow::Owned(contracted.graph);
        }

        Err(Error::ConvergenceFailure {
            stage: "levels",
            iterations: self.max_levels,
        })
    }
}

impl Default for Louvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for Louvain {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let weighted = WeightedGraph::from_unweighted_petgraph(graph)?;
        let (partition, _) = self.run(&weighted)?.into_final();
        Ok(partition.labels().to_vec())
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}
