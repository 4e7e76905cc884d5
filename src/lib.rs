//! # cohort
//!
//! Community detection on weighted undirected graphs by multi-level
//! modularity optimisation (the Louvain method).
//!
//! The engine alternates two phases until modularity stops improving:
//!
//! 1. **Local moving**: nodes greedily join the neighbouring community with
//!    the largest modularity gain.
//! 2. **Aggregation**: each community is contracted into a single node,
//!    internal weight becoming a self-loop.
//!
//! Every round is projected back onto the original nodes, giving a
//! [`Hierarchy`] of ever coarser [`Partition`]s.
//!
//! ```rust
//! use cohort::{Louvain, WeightedGraph};
//!
//! let graph = WeightedGraph::new(4, [(0, 1, 2.0), (2, 3, 2.0), (1, 2, 0.5)])?;
//! let hierarchy = Louvain::new().run(&graph)?;
//!
//! for (idx, members) in hierarchy.final_partition().iter() {
//!     println!("community {idx}: {members:?}");
//! }
//! # Ok::<(), cohort::Error>(())
//! ```
//!
//! Graph construction, layout and rendering are left to the caller; the
//! output boundary is the community → node-list mapping of a [`Partition`].

pub mod community;
/// Error types used across `cohort`.
pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod metrics;

pub use community::{modularity, CommunityDetection, Louvain};
pub use error::{Error, Result};
pub use graph::{Edge, WeightedGraph};
pub use hierarchy::{Hierarchy, Level, Partition};
pub use metrics::{ari, nmi};
