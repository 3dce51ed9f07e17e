use std::path::PathBuf;

use clap::Parser;
use job_matcher::{MatchConfig, Seeding};

/// Maximum bipartite matching between users and compatible jobs
#[derive(Parser, Debug)]
#[command(name = "job-matcher")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file (`numUsers numJobs numEdges` then labelled edges); stdin if omitted
    pub input: Option<PathBuf>,

    /// BFS seeding used by the layered matcher
    #[arg(short = 's', long, value_enum, default_value = "first-free")]
    pub seeding: SeedingArg,
}

impl Args {
    /// Convert command-line arguments into the matcher configuration
    pub fn to_config(&self) -> MatchConfig {
        MatchConfig::builder().seeding(self.seeding.into()).build()
    }
}

/// Command-line argument wrapper for Seeding
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeedingArg {
    /// Seed each phase from the first free user only
    #[value(name = "first-free")]
    FirstFree,
    /// Seed each phase from every free user (canonical Hopcroft-Karp)
    #[value(name = "all-free")]
    AllFree,
}

impl From<SeedingArg> for Seeding {
    fn from(arg: SeedingArg) -> Self {
        match arg {
            SeedingArg::FirstFree => Seeding::FirstFree,
            SeedingArg::AllFree => Seeding::AllFree,
        }
    }
}
