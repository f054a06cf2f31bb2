//! Run projections for every scenario in a CSV file
//!
//! Writes one summary row per scenario; rejected scenarios carry their error.

use anyhow::{Context, Result};
use clap::Parser;
use inflation_projection::report::write_results_csv;
use inflation_projection::scenario::{load_scenarios, run_scenarios};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV: name,annual_base_cost,annual_growth_rate,horizon_years
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "scenario_projection_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let proj_start = Instant::now();
    let results = run_scenarios(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_results_csv(BufWriter::new(file), &results)?;
    println!("Output written to {}", args.output.display());

    let rejected = results.iter().filter(|r| r.outcome.is_err()).count();
    println!("\nBatch Summary:");
    println!("  Projected: {}", results.len() - rejected);
    println!("  Rejected:  {}", rejected);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
