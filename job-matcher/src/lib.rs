//! Maximum bipartite matching between users and the jobs they are eligible for.
//!
//! The core works on a [`BipartiteGraph`] whose vertices are dense indices and
//! offers two independent matchers over it:
//!
//! - [`match_exact`]: per-user augmenting-path search, always maximum.
//! - [`match_layered`]: BFS layering plus layered DFS augmentation. By default
//!   each BFS is seeded from the first free user only
//!   ([`Seeding::FirstFree`]), which may stop below the maximum; pass
//!   [`Seeding::AllFree`] to [`match_layered_with`] for canonical
//!   Hopcroft-Karp.
//!
//! [`input`] turns labelled text into index pairs and [`report`] runs both
//! matchers and formats their counts. Python bindings are available behind
//! the `python` feature.

mod adjacency;
mod augmenting;
mod bitlist;
mod error;
mod hopcroft_karp;
pub mod input;
pub mod report;

#[cfg(feature = "python")]
mod python;


pub use adjacency::{BipartiteGraph, Matching};
pub use augmenting::{exact_matching, match_exact};
pub use error::{MatchError, Result, Side};
pub use hopcroft_karp::{Seeding, match_layered, match_layered_with};
pub use input::{LabelInterner, MatchInput, parse_input, read_input};
pub use report::{MatchConfig, MatchReport, match_graph, run};

/// Dense zero-based user index.
pub type UserIndex = usize;
/// Dense zero-based job index.
pub type JobIndex = usize;
/// Neighbors stored inline before a user's adjacency list spills to the heap.
pub const INLINE_NEIGHBOR_CAPACITY: usize = 4;
