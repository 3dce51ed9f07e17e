//! Runs both matchers over one graph and formats their counts.

use std::fmt;

use tracing::info;

use crate::adjacency::BipartiteGraph;
use crate::augmenting::match_exact;
use crate::error::Result;
use crate::hopcroft_karp::{Seeding, match_layered_with};
use crate::input::MatchInput;

/// Settings for a matching run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MatchConfig {
    /// BFS seeding used by the layered matcher.
    pub seeding: Seeding,
}

impl MatchConfig {
    /// Start from the defaults
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }
}

/// Builder for [`MatchConfig`]
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchConfigBuilder {
    seeding: Seeding,
}

impl MatchConfigBuilder {
    /// Set the layered matcher's BFS seeding
    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> MatchConfig {
        MatchConfig {
            seeding: self.seeding,
        }
    }
}

/// The two counts handed to the caller for display
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchReport {
    /// Count from the layered matcher.
    pub greedy: usize,
    /// Count from the augmenting-path matcher.
    pub exact: usize,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Greedy: {}", self.greedy)?;
        write!(f, "Exact: {}", self.exact)
    }
}

/// Run both matchers independently against `graph`
pub fn match_graph(graph: &BipartiteGraph, config: &MatchConfig) -> MatchReport {
    let (users, jobs) = (graph.num_users(), graph.num_jobs());
    let greedy = match_layered_with(graph, users, jobs, config.seeding);
    let exact = match_exact(graph, users, jobs);
    if greedy != exact {
        info!(greedy, exact, "layered matcher stopped short of the maximum");
    }
    MatchReport { greedy, exact }
}

/// Build the graph for `input` and run both matchers on it
pub fn run(input: &MatchInput, config: &MatchConfig) -> Result<MatchReport> {
    let graph = input.build_graph()?;
    Ok(match_graph(&graph, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_input;

    #[test]
    fn test_report_format() {
        let report = MatchReport {
            greedy: 3,
            exact: 4,
        };
        assert_eq!(report.to_string(), "Greedy: 3\nExact: 4");
    }

    #[test]
    fn test_builder_defaults_to_first_free() {
        assert_eq!(MatchConfig::builder().build(), MatchConfig::default());
        assert_eq!(MatchConfig::default().seeding, Seeding::FirstFree);
    }

    #[test]
    fn test_run_end_to_end() {
        let input = parse_input("3 3 4\nann cook\nbob cook\nbob driver\ncid pilot\n").unwrap();
        let report = run(&input, &MatchConfig::default()).unwrap();
        assert_eq!(report, MatchReport { greedy: 3, exact: 3 });
    }

    #[test]
    fn test_run_seeding_changes_greedy_only() {
        let text = "3 2 3\nann cook\nbob cook\ncid driver\n";
        let input = parse_input(text).unwrap();

        let first = run(&input, &MatchConfig::default()).unwrap();
        assert_eq!(first, MatchReport { greedy: 1, exact: 2 });

        let config = MatchConfig::builder().seeding(Seeding::AllFree).build();
        let all = run(&input, &config).unwrap();
        assert_eq!(all, MatchReport { greedy: 2, exact: 2 });
    }
}
