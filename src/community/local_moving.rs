//! Phase 1: greedy local moving.
//!
//! Nodes are visited in ascending id order. Each node is taken out of its
//! community and placed in the neighbouring community with the largest
//! positive gain
//!
//! ```text
//! ΔQ(c) ∝ 2 k_i,in(c) − γ sigma_tot[c] k_i / m
//! ```
//!
//! The node's own community is scored first and kept unless another
//! community does strictly better, so every accepted move raises modularity.
//! Ties among the other candidates go to the one enumerated first. A pass
//! with no moves ends the phase.

use super::state::CommunityState;
use crate::error::{Error, Result};
use crate::graph::WeightedGraph;
use log::{debug, trace};

/// Converged output of a local moving phase.
#[derive(Debug, Clone)]
pub struct LocalMoving {
    /// Final community state.
    pub state: CommunityState,
    /// Passes run, including the final pass with no moves.
    pub passes: usize,
    /// Total number of accepted moves.
    pub moves: usize,
}

/// Run local moving on `graph` from a singleton partition.
///
/// `m` is the total weight of the original graph.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `m` is not positive.
/// - [`Error::ConvergenceFailure`] if a pass still moves nodes after
///   `max_passes` passes.
pub fn local_moving(
    graph: &WeightedGraph,
    m: f64,
    resolution: f64,
    max_passes: usize,
) -> Result<LocalMoving> {
    if !(m > 0.0) {
        return Err(Error::InvalidParameter {
            name: "m",
            message: "total weight must be positive",
        });
    }

    let mut state = CommunityState::singletons(graph);
    let mut moves = 0;

    for pass in 0..max_passes {
        let mut moved = 0;
        for node in 0..graph.node_count() {
            if move_node(graph, &mut state, node, m, resolution) {
                moved += 1;
            }
        }
        debug!(
            "local moving pass {}: {} moves, {} communities",
            pass,
            moved,
            state.community_count()
        );

        if moved == 0 {
            return Ok(LocalMoving {
                state,
                passes: pass + 1,
                moves,
            });
        }
        moves += moved;
    }

    Err(Error::ConvergenceFailure {
        stage: "local moving",
        iterations: max_passes,
    })
}

/// Relocate one node. Returns whether its community changed.
fn move_node(
    graph: &WeightedGraph,
    state: &mut CommunityState,
    node: usize,
    m: f64,
    resolution: f64,
) -> bool {
    let links = state.neighbor_weights(graph, node);
    let k_i = graph.degree(node);

    let home = state.labels()[node];
    let home_k_in = links.get(&home).copied().unwrap_or(0.0);
    state.remove(graph, node, home_k_in);

    let gain_of = |k_in: f64, sigma_tot: f64| 2.0 * k_in - resolution * sigma_tot * k_i / m;

    let mut best = home;
    let mut best_gain = gain_of(home_k_in, state.sigma_tot()[home]).max(0.0);
    let mut best_k_in = home_k_in;
    for (&comm, &k_in) in &links {
        if comm == home {
            continue;
        }
        let gain = gain_of(k_in, state.sigma_tot()[comm]);
        if gain > best_gain {
            best = comm;
            best_gain = gain;
            best_k_in = k_in;
        }
    }

    state.insert(graph, node, best, best_k_in);
    if best != home {
        trace!("node {} moved {} -> {} (gain {:.6})", node, home, best, best_gain);
    }
    best != home
}
