//! Job Matcher CLI
//!
//! Reads users, jobs and their compatibility edges, then prints the matching
//! size found by the layered matcher and by the exact matcher.

mod args;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use job_matcher::{read_input, run};
use tracing::info;

use args::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    let input = match &args.input {
        Some(path) => {
            info!("Reading input: {}", path.display());
            read_input(BufReader::new(File::open(path)?))?
        }
        None => read_input(io::stdin().lock())?,
    };

    let report = run(&input, &config)?;
    println!("{report}");

    Ok(())
}
