use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use flight_planner::domain::{AirportCode, Itinerary};
use flight_planner::graph::RouteGraph;
use flight_planner::output::{RoundTripView, render_json, summary_line, to_json};
use flight_planner::planner::{
    DEFAULT_MAX_LAYOVER_MINS, DEFAULT_MIN_LAYOVER_MINS, Planner, SearchConfig, SearchQuery,
};

/// Find direct and one-stop flights between two airports, cheapest first.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the CSV flight schedule
    csv_file: PathBuf,

    /// Origin airport code
    origin: String,

    /// Destination airport code
    destination: String,

    /// Number of checked bags
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Also search the return direction (reported separately)
    #[arg(long = "return")]
    return_trip: bool,

    /// Minimum layover between connecting flights, in minutes
    #[arg(long, default_value_t = DEFAULT_MIN_LAYOVER_MINS)]
    min_layover: i64,

    /// Maximum layover between connecting flights, in minutes
    #[arg(long, default_value_t = DEFAULT_MAX_LAYOVER_MINS)]
    max_layover: i64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let graph = RouteGraph::from_csv_path(&args.csv_file)?;
    let config = SearchConfig::new(args.min_layover, args.max_layover);
    let planner = Planner::new(&graph, &config);

    let query = SearchQuery::new(
        AirportCode::normalized(&args.origin),
        AirportCode::normalized(&args.destination),
        args.bags,
    );

    let outbound = planner.plan(&query)?;
    report(&query, &outbound);

    let json = if args.return_trip {
        let back = query.reversed();
        let inbound = planner.plan(&back)?;
        report(&back, &inbound);
        to_json(&RoundTripView::new(&outbound, &inbound), args.pretty)?
    } else {
        render_json(&outbound, args.pretty)?
    };

    println!("{json}");
    Ok(())
}

fn report(query: &SearchQuery, itineraries: &[Itinerary]) {
    if itineraries.is_empty() {
        warn!(origin = %query.origin, destination = %query.destination, "no itineraries");
    }
    eprintln!(
        "{}",
        summary_line(&query.origin, &query.destination, itineraries.len())
    );
}
