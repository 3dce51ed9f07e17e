//! Layered (Hopcroft-Karp style) Bipartite Matching
//!
//! Alternates a BFS that assigns layer distances to users with a DFS that only
//! follows edges into the next layer. Users and jobs are shifted to 1-based
//! indices so that index 0 can act as the shared "free" vertex: `match_user[u]
//! == FREE` means user `u` is unmatched, `match_job[j] == FREE` means job `j` is
//! unmatched, and `dist[FREE]` becoming finite signals that a free job was
//! reached in the current phase.
//!
//! With [`Seeding::FirstFree`] only the first free user seeds each BFS, which
//! limits every phase to augmenting paths starting at that one user and can
//! stop before the maximum is reached. [`Seeding::AllFree`] is the canonical
//! multi-source seeding and always reaches the maximum in O(E * sqrt(V)) time.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::adjacency::BipartiteGraph;

/// Dummy vertex shared by both sides
const FREE: usize = 0;
const INF: usize = usize::MAX;

/// How the BFS of every phase picks its starting users
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Seeding {
    /// Only the lowest-indexed free user starts the layering.
    #[default]
    FirstFree,
    /// Every free user starts at layer 0.
    AllFree,
}

/// Matching counts using [`Seeding::FirstFree`]
pub fn match_layered(graph: &BipartiteGraph, num_users: usize, num_jobs: usize) -> usize {
    match_layered_with(graph, num_users, num_jobs, Seeding::FirstFree)
}

/// Run the layered matcher with an explicit seeding policy and return the
/// number of augmentations performed across all phases.
pub fn match_layered_with(
    graph: &BipartiteGraph,
    num_users: usize,
    num_jobs: usize,
    seeding: Seeding,
) -> usize {
    debug_assert_eq!(graph.num_users(), num_users);
    debug_assert_eq!(graph.num_jobs(), num_jobs);

    let mut state = LayeredState::new(num_users, num_jobs);
    let mut total = 0;
    let mut phase = 0usize;

    while state.bfs(graph, seeding) {
        let depth = state.dist[FREE];
        let mut augmented = 0;
        for user in 1..=num_users {
            if state.match_user[user] == FREE && state.dfs(graph, user) {
                augmented += 1;
            }
        }
        trace!(phase, depth, augmented, "layered phase");
        total += augmented;
        phase += 1;
    }

    debug!(?seeding, phases = phase, total, "layered matching finished");
    total
}

/// Matching and layer state over 1-based users/jobs, index 0 = [`FREE`]
struct LayeredState {
    num_users: usize,
    /// match_user[u] = job matched to user u, or FREE
    match_user: Vec<usize>,
    /// match_job[j] = user matched to job j, or FREE
    match_job: Vec<usize>,
    /// dist[u] = BFS layer of user u; dist[FREE] = layer at which a free job was reached
    dist: Vec<usize>,
    queue: VecDeque<usize>,
}

impl LayeredState {
    fn new(num_users: usize, num_jobs: usize) -> Self {
        Self {
            num_users,
            match_user: vec![FREE; num_users + 1],
            match_job: vec![FREE; num_jobs + 1],
            dist: vec![INF; num_users + 1],
            queue: VecDeque::with_capacity(num_users + 1),
        }
    }

    /// Shifted neighbors of 1-based `user`
    fn jobs_of<'g>(graph: &'g BipartiteGraph, user: usize) -> impl Iterator<Item = usize> + 'g {
        graph.neighbors(user - 1).iter().map(|&job| job + 1)
    }

    /// BFS phase: builds layers of alternating paths, returns true if a free
    /// job is reachable
    fn bfs(&mut self, graph: &BipartiteGraph, seeding: Seeding) -> bool {
        self.queue.clear();
        self.dist.fill(INF);

        for user in 1..=self.num_users {
            if self.match_user[user] == FREE {
                self.dist[user] = 0;
                self.queue.push_back(user);
                if seeding == Seeding::FirstFree {
                    break;
                }
            }
        }

        while let Some(user) = self.queue.pop_front() {
            if self.dist[user] < self.dist[FREE] {
                for job in Self::jobs_of(graph, user) {
                    let owner = self.match_job[job];
                    if self.dist[owner] == INF {
                        self.dist[owner] = self.dist[user] + 1;
                        if owner != FREE {
                            self.queue.push_back(owner);
                        }
                    }
                }
            }
        }

        self.dist[FREE] != INF
    }

    /// DFS phase: augments along one layered path starting at `user`
    fn dfs(&mut self, graph: &BipartiteGraph, user: usize) -> bool {
        if user == FREE {
            return true;
        }
        // Users outside this phase's layering cannot advance
        if self.dist[user] == INF {
            return false;
        }

        let next_layer = self.dist[user] + 1;
        for job in Self::jobs_of(graph, user) {
            let owner = self.match_job[job];
            if self.dist[owner] == next_layer && self.dfs(graph, owner) {
                self.match_job[job] = user;
                self.match_user[user] = job;
                return true;
            }
        }

        // Dead end for the rest of this phase
        self.dist[user] = INF;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(users: usize, jobs: usize, edges: &[(usize, usize)]) -> BipartiteGraph {
        BipartiteGraph::build(users, jobs, edges.iter().copied()).unwrap()
    }

    #[test]
    fn test_layered_simple() {
        let g = graph(2, 2, &[(0, 0), (1, 1)]);
        assert_eq!(match_layered(&g, 2, 2), 2);
        assert_eq!(match_layered_with(&g, 2, 2, Seeding::AllFree), 2);
    }

    #[test]
    fn test_layered_full() {
        let g = graph(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(match_layered(&g, 2, 2), 2);
        assert_eq!(match_layered_with(&g, 2, 2, Seeding::AllFree), 2);
    }

    #[test]
    fn test_layered_reroutes_through_matched_user() {
        // Phase 2 must move user 0 from job 1 to job 0 to make room for user 1
        let g = graph(2, 2, &[(0, 1), (0, 0), (1, 1)]);
        assert_eq!(match_layered(&g, 2, 2), 2);
    }

    #[test]
    fn test_first_free_stops_at_stuck_user() {
        // Users 0 and 1 both only fit job 0; user 2 fits job 1. Once user 1 is
        // the first free user, no path exists from it and the phases end.
        let g = graph(3, 2, &[(0, 0), (1, 0), (2, 1)]);
        assert_eq!(match_layered(&g, 3, 2), 1);
        assert_eq!(match_layered_with(&g, 3, 2, Seeding::AllFree), 2);
    }

    #[test]
    fn test_first_free_isolated_leading_user() {
        let g = graph(2, 1, &[(1, 0)]);
        assert_eq!(match_layered(&g, 2, 1), 0);
        assert_eq!(match_layered_with(&g, 2, 1, Seeding::AllFree), 1);
    }

    #[test]
    fn test_layered_no_users() {
        let g = graph(0, 3, &[]);
        assert_eq!(match_layered(&g, 0, 3), 0);
        assert_eq!(match_layered_with(&g, 0, 3, Seeding::AllFree), 0);
    }
}
