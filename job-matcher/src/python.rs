//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adjacency::BipartiteGraph;
use crate::error::MatchError;
use crate::hopcroft_karp::Seeding;
use crate::input::parse_input;
use crate::report::{MatchConfig, MatchReport, match_graph};

impl From<MatchError> for PyErr {
    fn from(err: MatchError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn config_for(canonical: bool) -> MatchConfig {
    let seeding = if canonical {
        Seeding::AllFree
    } else {
        Seeding::FirstFree
    };
    MatchConfig::builder().seeding(seeding).build()
}

fn counts(report: MatchReport) -> (usize, usize) {
    (report.greedy, report.exact)
}

/// Match a graph given as dense index pairs.
///
/// Args:
///     num_users: Number of users (left vertices).
///     num_jobs: Number of jobs (right vertices).
///     edges: List of (user, job) index pairs.
///     canonical: Seed every layered BFS with all free users.
///
/// Returns:
///     (greedy, exact) matching sizes.
#[pyfunction]
#[pyo3(signature = (num_users, num_jobs, edges, canonical = false))]
fn match_counts(
    num_users: usize,
    num_jobs: usize,
    edges: Vec<(usize, usize)>,
    canonical: bool,
) -> PyResult<(usize, usize)> {
    let graph = BipartiteGraph::build(num_users, num_jobs, edges)?;
    Ok(counts(match_graph(&graph, &config_for(canonical))))
}

/// Parse labelled input text and match it.
///
/// Returns:
///     (greedy, exact) matching sizes.
#[pyfunction]
#[pyo3(signature = (text, canonical = false))]
fn parse_and_match(text: &str, canonical: bool) -> PyResult<(usize, usize)> {
    let input = parse_input(text)?;
    let graph = input.build_graph()?;
    Ok(counts(match_graph(&graph, &config_for(canonical))))
}

/// Python module for bipartite job matching
#[pymodule]
fn job_matcher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(match_counts, m)?)?;
    m.add_function(wrap_pyfunction!(parse_and_match, m)?)?;
    Ok(())
}
