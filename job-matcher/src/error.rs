//! Error types for graph construction and input handling.
//!
//! The matchers themselves never fail: once a [`BipartiteGraph`](crate::BipartiteGraph)
//! exists, every index it hands out is in range.

use std::fmt;

use thiserror::Error;

/// One of the two vertex sets of the bipartite graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The left-hand population.
    User,
    /// The right-hand population.
    Job,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => f.write_str("user"),
            Side::Job => f.write_str("job"),
        }
    }
}

/// Errors raised before any matcher runs.
#[derive(Debug, Error)]
pub enum MatchError {
    /// An edge references a vertex outside its declared range.
    #[error("{side} index {index} is out of range (declared {bound} {side}s)")]
    InvalidVertexIndex {
        /// Which side the offending index belongs to.
        side: Side,
        /// The offending index.
        index: usize,
        /// The declared vertex count for that side.
        bound: usize,
    },

    /// The input stream is malformed or its counts are inconsistent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading the input stream failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
