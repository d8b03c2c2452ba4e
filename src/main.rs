use std::path::PathBuf;
use std::process;

use clap::Parser;

use nn_tour::constructive::build_tour;
use nn_tour::io::load_cities;
use nn_tour::report::print_report;
use nn_tour::Result;

/// Approximate a TSP tour with the nearest-neighbor heuristic.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Coordinate file containing a NODE_COORD_SECTION
    file: PathBuf,

    /// ID of the city the tour starts and ends at
    start_id: usize,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let cities = load_cities(&args.file)?;
    let tour = build_tour(cities, args.start_id)?;
    print_report(&tour)?;
    Ok(())
}
