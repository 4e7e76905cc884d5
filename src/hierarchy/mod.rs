//! Partitions of the original node set, one per aggregation level.
//!
//! # Levels
//!
//! Every round of the driver runs on a coarser graph whose nodes stand for
//! communities found earlier. The driver expands each round's result back
//! to original node ids before recording it, so every [`Level`] can be read
//! on its own:
//!
//! ```text
//! level 0   {0,1} {2} {3,4} {5}      (local moving on the input graph)
//! level 1   {0,1,2} {3,4,5}          (local moving on 4 super-nodes)
//! ```
//!
//! Later levels are always unions of earlier communities.
//!
//! - [`Partition`]: an ordered, complete and disjoint cover of `0..n`
//! - [`Level`]: one round's partition plus its modularity
//! - [`Hierarchy`]: all recorded rounds, finest first

mod levels;
mod partition;

pub use levels::{Hierarchy, Level};
pub use partition::Partition;
