//! Textual input: header counts followed by labelled edges.
//!
//! The format is whitespace separated:
//!
//! ```text
//! <numUsers> <numJobs> <numEdges>
//! <userLabel> <jobLabel>      (numEdges times)
//! ```
//!
//! Labels are interned per side in first-occurrence order, so the first user
//! label seen becomes user 0, the next new one user 1, and so on.

use std::io::Read;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::adjacency::BipartiteGraph;
use crate::error::{MatchError, Result};
use crate::{JobIndex, UserIndex};

/// Maps free-text labels to dense indices
#[derive(Clone, Debug, Default)]
pub struct LabelInterner {
    labels: IndexSet<String>,
}

impl LabelInterner {
    /// Empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `label`, assigning the next free one on first sight
    pub fn intern(&mut self, label: &str) -> usize {
        match self.labels.get_index_of(label) {
            Some(index) => index,
            None => self.labels.insert_full(label.to_owned()).0,
        }
    }

    /// Number of distinct labels seen so far
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no label has been interned yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label that was interned as `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(String::as_str)
    }
}

/// Parsed input, edges already expressed as dense indices
#[derive(Clone, Debug)]
pub struct MatchInput {
    /// Declared user count.
    pub num_users: usize,
    /// Declared job count.
    pub num_jobs: usize,
    /// Edges in input order.
    pub edges: Vec<(UserIndex, JobIndex)>,
    /// User labels by index.
    pub users: LabelInterner,
    /// Job labels by index.
    pub jobs: LabelInterner,
}

impl MatchInput {
    /// Build the compatibility graph over the declared vertex counts.
    ///
    /// More distinct labels than declared on either side surfaces as
    /// [`MatchError::InvalidVertexIndex`].
    pub fn build_graph(&self) -> Result<BipartiteGraph> {
        let graph =
            BipartiteGraph::build(self.num_users, self.num_jobs, self.edges.iter().copied())?;
        for (user, jobs) in graph.users() {
            debug!(
                user = self.users.label(user).unwrap_or("?"),
                jobs = ?jobs
                    .iter()
                    .map(|&job| self.jobs.label(job).unwrap_or("?"))
                    .collect::<Vec<_>>(),
                "adjacency"
            );
        }
        Ok(graph)
    }
}

/// Parse the whole input text
pub fn parse_input(text: &str) -> Result<MatchInput> {
    let mut tokens = text.split_whitespace();

    let num_users = parse_count(tokens.next(), "user count")?;
    let num_jobs = parse_count(tokens.next(), "job count")?;
    let num_edges = parse_count(tokens.next(), "edge count")?;

    let mut users = LabelInterner::new();
    let mut jobs = LabelInterner::new();
    let mut edges = Vec::with_capacity(num_edges);

    for i in 0..num_edges {
        let (Some(user), Some(job)) = (tokens.next(), tokens.next()) else {
            return Err(MatchError::invalid_input(format!(
                "expected {num_edges} edges, input ends after {i}"
            )));
        };
        let edge = (users.intern(user), jobs.intern(job));
        trace!(user, job, ?edge, "edge");
        edges.push(edge);
    }

    debug!(
        num_users,
        num_jobs,
        num_edges,
        distinct_users = users.len(),
        distinct_jobs = jobs.len(),
        "parsed input"
    );

    Ok(MatchInput {
        num_users,
        num_jobs,
        edges,
        users,
        jobs,
    })
}

/// Read `reader` to the end and parse it
pub fn read_input(mut reader: impl Read) -> Result<MatchInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_input(&text)
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize> {
    let token = token.ok_or_else(|| MatchError::invalid_input(format!("missing {what}")))?;
    token.parse::<usize>().map_err(|_| {
        MatchError::invalid_input(format!(
            "{what} must be a non-negative integer, got {token:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Side;

    #[test]
    fn test_interner_first_occurrence_order() {
        let mut interner = LabelInterner::new();
        assert_eq!(interner.intern("bob"), 0);
        assert_eq!(interner.intern("alice"), 1);
        assert_eq!(interner.intern("bob"), 0);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.label(1), Some("alice"));
        assert_eq!(interner.label(2), None);
    }

    #[test]
    fn test_interner_repeated_labels_keep_indices() {
        let mut interner = LabelInterner::new();
        assert!(interner.is_empty());
        let labels = ["cook", "pilot", "cook", "driver", "pilot", "cook"];
        let indices: Vec<_> = labels.iter().map(|l| interner.intern(l)).collect();
        assert_eq!(indices, vec![0, 1, 0, 2, 1, 0]);
        assert_eq!(interner.len(), 3);
        assert_eq!(interner.label(0), Some("cook"));
        assert_eq!(interner.label(2), Some("driver"));
    }

    #[test]
    fn test_parse_interns_each_side_separately() {
        let input = parse_input("2 2 3\nann cook\nbob cook\nann driver\n").unwrap();
        assert_eq!(input.num_users, 2);
        assert_eq!(input.num_jobs, 2);
        assert_eq!(input.edges, vec![(0, 0), (1, 0), (0, 1)]);
        assert_eq!(input.users.label(1), Some("bob"));
        assert_eq!(input.jobs.label(1), Some("driver"));
    }

    #[test]
    fn test_same_label_on_both_sides() {
        let input = parse_input("1 1 1 x x").unwrap();
        assert_eq!(input.edges, vec![(0, 0)]);
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let err = parse_input("-1 2 0").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let err = parse_input("3 4").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(msg) if msg.contains("edge count")));
    }

    #[test]
    fn test_parse_rejects_truncated_edges() {
        let err = parse_input("2 2 2\na x\nb").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput(msg) if msg.contains("after 1")));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let input = parse_input("1 1 1 a x extra tokens").unwrap();
        assert_eq!(input.edges.len(), 1);
    }

    #[test]
    fn test_too_many_labels_fail_graph_build() {
        let input = parse_input("1 2 2\na x\nb y").unwrap();
        let err = input.build_graph().unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidVertexIndex {
                side: Side::User,
                index: 1,
                bound: 1
            }
        ));
    }

    #[test]
    fn test_read_input_from_reader() {
        let input = read_input("1 1 1\nu j\n".as_bytes()).unwrap();
        let graph = input.build_graph().unwrap();
        assert_eq!(graph.neighbors(0), &[0]);
    }
}
