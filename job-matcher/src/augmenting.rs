//! Augmenting-Path Maximum Bipartite Matching (Kuhn's algorithm)
//!
//! Tries every user once, in index order, with a depth-first search for an
//! augmenting path. Runs in O(V * E) time and always reaches the maximum
//! cardinality.

use tracing::{debug, trace};

use crate::adjacency::{BipartiteGraph, Matching};
use crate::bitlist::BitList;
use crate::UserIndex;

/// Size of a maximum matching of `graph`.
///
/// `num_users` and `num_jobs` must match the counts the graph was built with.
pub fn match_exact(graph: &BipartiteGraph, num_users: usize, num_jobs: usize) -> usize {
    debug_assert_eq!(graph.num_users(), num_users);
    debug_assert_eq!(graph.num_jobs(), num_jobs);

    let matching = exact_matching(graph);
    let total = matching.size();
    debug!(total, "augmenting-path matching finished");
    total
}

/// Maximum matching of `graph` found by per-user augmentation
pub fn exact_matching(graph: &BipartiteGraph) -> Matching {
    let mut matching = Matching::new(graph.num_users(), graph.num_jobs());
    let mut seen = BitList::zeros(graph.num_jobs());

    for user in 0..graph.num_users() {
        seen.clear();
        let augmented = try_augment(graph, &mut matching, &mut seen, user);
        trace!(user, augmented, visited = seen.count_ones(), "augmentation attempt");
    }

    matching
}

/// DFS from `user`: claim the first job that is free or whose owner can move on
fn try_augment(
    graph: &BipartiteGraph,
    matching: &mut Matching,
    seen: &mut BitList,
    user: UserIndex,
) -> bool {
    for &job in graph.neighbors(user) {
        if !seen.insert(job) {
            continue;
        }
        let movable = match matching.user_of(job) {
            None => true,
            Some(owner) => try_augment(graph, matching, seen, owner),
        };
        if movable {
            matching.match_pair(user, job);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(users: usize, jobs: usize, edges: &[(usize, usize)]) -> BipartiteGraph {
        BipartiteGraph::build(users, jobs, edges.iter().copied()).unwrap()
    }

    #[test]
    fn test_exact_identity() {
        let g = graph(2, 2, &[(0, 0), (1, 1)]);
        assert_eq!(match_exact(&g, 2, 2), 2);
    }

    #[test]
    fn test_exact_reassigns_on_conflict() {
        // User 0 grabs job 1 first; user 1 only fits job 1, so user 0 moves to job 0
        let g = graph(2, 2, &[(0, 1), (0, 0), (1, 1)]);
        let matching = exact_matching(&g);
        assert_eq!(matching.size(), 2);
        assert_eq!(matching.job_of(0), Some(0));
        assert_eq!(matching.job_of(1), Some(1));
        assert!(matching.is_valid_for(&g));
    }

    #[test]
    fn test_exact_bottleneck_job() {
        let g = graph(3, 1, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(match_exact(&g, 3, 1), 1);
    }

    #[test]
    fn test_exact_long_augmenting_chain() {
        // Each new user pushes every previous one a step along the chain
        let edges = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3), (3, 0)];
        let g = graph(4, 4, &edges);
        let matching = exact_matching(&g);
        assert_eq!(matching.size(), 4);
        assert!(matching.is_valid_for(&g));
    }
}
