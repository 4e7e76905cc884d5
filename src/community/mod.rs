//! Community detection by multi-level modularity optimisation.
//!
//! Given a weighted graph, find groupings where nodes within groups are
//! densely connected, and connections between groups are sparse.
//!
//! ## The Modularity Objective
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij - γ(k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = total edge weight (sum of all edges)
//! - A_ij = edge weight between i and j
//! - k_i = weighted degree of node i
//! - γ = resolution parameter
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! Grouped per community this is the aggregate form the algorithm works
//! with:
//!
//! ```text
//! Q = Σ_c [ sigma_in[c]/(2m) − γ (sigma_tot[c]/(2m))² ]
//! ```
//!
//! ## The Resolution Parameter γ
//!
//! - **γ = 1**: Standard modularity (default)
//! - **γ > 1**: Smaller communities (higher penalty for merging)
//! - **γ < 1**: Larger communities (lower penalty for merging)
//!
//! ## Pieces
//!
//! - [`local_moving`]: phase 1, greedy node moves on one level
//! - [`aggregate`]: phase 2, contract communities into super-nodes
//! - [`Louvain`]: alternates the two phases and records a [`Hierarchy`]
//! - [`modularity`] / [`modularity_from_aggregates`]: the objective
//!
//! ## Usage
//!
//! ```rust
//! use cohort::{Louvain, WeightedGraph};
//!
//! let graph = WeightedGraph::from_unweighted(
//!     6,
//!     [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)],
//! )?;
//! let hierarchy = Louvain::new().run(&graph)?;
//!
//! assert_eq!(hierarchy.final_partition().communities(), &[vec![0, 1, 2], vec![3, 4, 5]]);
//! assert!(hierarchy.modularity() > 0.0);
//! # Ok::<(), cohort::Error>(())
//! ```
//!
//! ## References
//!
//! - Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."
//!
//! [`Hierarchy`]: crate::hierarchy::Hierarchy

mod aggregation;
mod local_moving;
mod louvain;
mod modularity;
mod state;
mod traits;

pub use aggregation::{aggregate, renumber, Aggregate};
pub use local_moving::{local_moving, LocalMoving};
pub use louvain::Louvain;
pub use modularity::{modularity, modularity_from_aggregates};
pub use state::CommunityState;
pub use traits::CommunityDetection;
