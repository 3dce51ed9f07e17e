use smallvec::SmallVec;
use tracing::debug;

use crate::error::{MatchError, Result, Side};
use crate::{INLINE_NEIGHBOR_CAPACITY, JobIndex, UserIndex};

type Neighbors = SmallVec<[JobIndex; INLINE_NEIGHBOR_CAPACITY]>;

/// Bipartite compatibility graph (user -> job adjacency lists, insertion order)
///
/// Only the user side stores edges; matchers derive whatever reverse
/// information they need on their own.
#[derive(Clone, Debug)]
pub struct BipartiteGraph {
    num_users: usize,
    num_jobs: usize,
    adjacency: Vec<Neighbors>,
}

impl BipartiteGraph {
    /// Build a graph from `(user, job)` edges.
    ///
    /// Duplicate edges are kept. Fails with [`MatchError::InvalidVertexIndex`]
    /// on the first edge whose user is not below `num_users` or whose job is
    /// not below `num_jobs`.
    pub fn build(
        num_users: usize,
        num_jobs: usize,
        edges: impl IntoIterator<Item = (UserIndex, JobIndex)>,
    ) -> Result<Self> {
        let mut adjacency = vec![Neighbors::new(); num_users];
        for (user, job) in edges {
            if user >= num_users {
                return Err(MatchError::InvalidVertexIndex {
                    side: Side::User,
                    index: user,
                    bound: num_users,
                });
            }
            if job >= num_jobs {
                return Err(MatchError::InvalidVertexIndex {
                    side: Side::Job,
                    index: job,
                    bound: num_jobs,
                });
            }
            adjacency[user].push(job);
        }

        let graph = Self {
            num_users,
            num_jobs,
            adjacency,
        };
        debug!(
            users = graph.num_users,
            jobs = graph.num_jobs,
            edges = graph.num_edges(),
            "built bipartite graph"
        );
        Ok(graph)
    }

    /// Declared user count
    pub fn num_users(&self) -> usize {
        self.num_users
    }

    /// Declared job count
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Total number of stored edges, duplicates included
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|jobs| jobs.len()).sum()
    }

    /// Jobs compatible with `user`, in the order the edges were added
    pub fn neighbors(&self, user: UserIndex) -> &[JobIndex] {
        &self.adjacency[user]
    }

    /// Iterate over every user together with its neighbors
    pub fn users(&self) -> impl Iterator<Item = (UserIndex, &[JobIndex])> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(user, jobs)| (user, jobs.as_slice()))
    }

    /// Check whether `user` and `job` share at least one edge
    pub fn has_edge(&self, user: UserIndex, job: JobIndex) -> bool {
        user < self.num_users && self.adjacency[user].contains(&job)
    }
}

/// Represents a matching in a bipartite graph
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matching {
    /// user_to_job[u] = Some(j) means user u is matched to job j
    pub user_to_job: Vec<Option<JobIndex>>,
    /// job_to_user[j] = Some(u) means job j is matched to user u
    pub job_to_user: Vec<Option<UserIndex>>,
}

impl Matching {
    /// Empty matching over the given vertex counts
    pub fn new(num_users: usize, num_jobs: usize) -> Self {
        Self {
            user_to_job: vec![None; num_users],
            job_to_user: vec![None; num_jobs],
        }
    }

    /// Assign `job` to `user`, overwriting both previous owners' slots
    pub fn match_pair(&mut self, user: UserIndex, job: JobIndex) {
        self.user_to_job[user] = Some(job);
        self.job_to_user[job] = Some(user);
    }

    /// Job matched to `user`, if any
    pub fn job_of(&self, user: UserIndex) -> Option<JobIndex> {
        self.user_to_job[user]
    }

    /// User matched to `job`, if any
    pub fn user_of(&self, job: JobIndex) -> Option<UserIndex> {
        self.job_to_user[job]
    }

    /// Number of matched pairs
    pub fn size(&self) -> usize {
        self.user_to_job.iter().filter(|x| x.is_some()).count()
    }

    /// Matched `(user, job)` pairs ordered by user
    pub fn pairs(&self) -> impl Iterator<Item = (UserIndex, JobIndex)> + '_ {
        self.user_to_job
            .iter()
            .enumerate()
            .filter_map(|(user, job)| job.map(|job| (user, job)))
    }

    /// True if both maps are mutual inverses and every pair is an edge of `graph`
    pub fn is_valid_for(&self, graph: &BipartiteGraph) -> bool {
        if self.user_to_job.len() != graph.num_users() || self.job_to_user.len() != graph.num_jobs()
        {
            return false;
        }
        let forward = self
            .pairs()
            .all(|(user, job)| self.job_to_user[job] == Some(user) && graph.has_edge(user, job));
        let backward = self
            .job_to_user
            .iter()
            .enumerate()
            .all(|(job, user)| user.is_none_or(|user| self.user_to_job[user] == Some(job)));
        forward && backward
    }
}
