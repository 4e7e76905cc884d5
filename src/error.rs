use core::fmt;

/// Result alias for `cohort`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by graph construction and community detection.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty (no nodes).
    EmptyInput,

    /// An edge referenced a node outside `0..n_nodes`.
    NodeOutOfRange {
        /// Offending node id.
        node: usize,
        /// Number of declared nodes.
        n_nodes: usize,
    },

    /// An edge weight was negative, NaN or infinite.
    InvalidWeight {
        /// Index of the edge in the input sequence.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// An iterative phase did not settle within its limit.
    ConvergenceFailure {
        /// Which phase gave up ("local moving" or "levels").
        stage: &'static str,
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A community list was not a complete, disjoint cover of the nodes.
    InvalidPartition {
        /// First node found to violate the cover.
        node: usize,
        /// What went wrong.
        reason: &'static str,
    },

    /// A labeling did not match the graph or partition it was paired with.
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NodeOutOfRange { node, n_nodes } => {
                write!(f, "edge references node {node}, but the graph has {n_nodes} nodes")
            }
            Error::InvalidWeight { edge, weight } => {
                write!(f, "edge {edge} has invalid weight {weight}")
            }
            Error::ConvergenceFailure { stage, iterations } => {
                write!(f, "{stage} did not converge after {iterations} iterations")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::InvalidPartition { node, reason } => {
                write!(f, "invalid partition at node {node}: {reason}")
            }
            Error::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected}, found {found}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
