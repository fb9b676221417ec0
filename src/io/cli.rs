//! Command-line interface for single solves and batch surveys

use crate::io::configuration::{DEFAULT_COLORS, DEFAULT_MAXIMUM_SIZE};
use crate::io::error::{Result, SolverError};
use crate::io::progress::SurveyProgress;
use crate::io::render::{parse_tile_set, render_rectangle};
use crate::solver::{SearchOutcome, SolverConfig, solve};
use crate::survey::{SurveyStatistics, TileSetEnumerator};
use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Read};
use std::path::PathBuf;

/// Command-line arguments for the period search tool
#[derive(Parser)]
#[command(name = "periodtile")]
#[command(
    author,
    version,
    about = "Search for periodic plane tilings by Wang tile sets"
)]
pub struct Cli {
    /// Selected subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Solve a single tile set read from a file or standard input
    Solve(SolveArgs),
    /// Check every tile set of a given size and aggregate statistics
    Survey(SurveyArgs),
}

/// Arguments of the `solve` subcommand
#[derive(Args)]
pub struct SolveArgs {
    /// Tile list file, one "up right down left" quadruple per line;
    /// standard input when omitted
    #[arg(value_name = "TILES")]
    pub input: Option<PathBuf>,

    /// Maximum rectangle dimension to search
    #[arg(short, long, default_value_t = DEFAULT_MAXIMUM_SIZE)]
    pub max_size: usize,

    /// Skip 1-wide rectangles except at height 1
    #[arg(long)]
    pub skip_width_one: bool,

    /// Only search widths up to the current height
    #[arg(long)]
    pub limit_width_to_height: bool,
}

/// Arguments of the `survey` subcommand
#[derive(Args)]
pub struct SurveyArgs {
    /// Number of tiles per set
    #[arg(short, long)]
    pub tiles: usize,

    /// Number of edge colors in the alphabet
    #[arg(short, long, default_value_t = DEFAULT_COLORS)]
    pub colors: u8,

    /// Maximum rectangle dimension to search per set
    #[arg(short, long, default_value_t = DEFAULT_MAXIMUM_SIZE)]
    pub max_size: usize,

    /// Check every set instead of pruning by the canonical first tile
    #[arg(long)]
    pub no_canonical_prune: bool,

    /// Answer sample queries interactively after the survey
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the selected subcommand
///
/// # Errors
///
/// Returns an error if input parsing or solver configuration fails.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve(args) => run_solve(&args),
        Command::Survey(args) => run_survey(&args),
    }
}

#[allow(clippy::print_stdout)]
fn run_solve(args: &SolveArgs) -> Result<()> {
    let input = match &args.input {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| SolverError::FileSystem {
                path: path.clone(),
                operation: "read",
                source,
            })?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tiles = parse_tile_set(&input)?;
    let config = SolverConfig {
        maximum_size: args.max_size,
        skip_width_one: args.skip_width_one,
        limit_width_to_height: args.limit_width_to_height,
    };

    match solve(&tiles, &config)? {
        SearchOutcome::Periodic { period } => {
            println!("found the period");
            println!("rows = {} columns = {}", period.height(), period.width());
            print!("{}", render_rectangle(&period));
        }
        SearchOutcome::Bounded {
            largest: Some(largest),
        } => {
            println!("didn't find a period");
            println!("rows = {} columns = {}", largest.height(), largest.width());
            print!("{}", render_rectangle(&largest));
        }
        SearchOutcome::Bounded { largest: None } => {
            println!("didn't find a period");
            println!("no rectangle could be filled");
        }
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn run_survey(args: &SurveyArgs) -> Result<()> {
    let enumerator = TileSetEnumerator::new(args.colors, args.tiles, !args.no_canonical_prune);
    let config = SolverConfig::new(args.max_size);
    let progress = (!args.quiet).then(|| SurveyProgress::new(enumerator.set_count()));

    let mut statistics = SurveyStatistics::new();
    for tile_set in enumerator.iter() {
        let outcome = solve(&tile_set, &config)?;
        statistics.record(&tile_set, &outcome);
        if let Some(ref progress) = progress {
            progress.record_set(statistics.tiling_sets, statistics.non_tiling_sets);
        }
    }

    if let Some(ref progress) = progress {
        progress.finish();
    }

    print!("{}", statistics.render_report());

    if args.interactive {
        run_query_loop(&statistics)?;
    }

    Ok(())
}

/// Reply to one sample query line
#[derive(Debug, PartialEq, Eq)]
pub enum QueryResponse {
    /// Text to show the user, possibly a benign "not found"
    Answer(String),
    /// The user asked to stop
    Quit,
}

/// Answer a single query against the survey statistics
///
/// Queries are `tiling H W`, `non-tiling H W`, or `quit`. Unobserved
/// dimensions are a benign "not found" answer, not an error.
pub fn answer_query(statistics: &SurveyStatistics, line: &str) -> QueryResponse {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["quit" | "exit"] => QueryResponse::Quit,
        [kind @ ("tiling" | "non-tiling"), height, width] => {
            let (Ok(height), Ok(width)) = (height.parse::<usize>(), width.parse::<usize>()) else {
                return QueryResponse::Answer(String::from(
                    "expected numeric dimensions: <kind> <height> <width>",
                ));
            };

            let bucket = if *kind == "tiling" {
                statistics.tiling_sample(height, width)
            } else {
                statistics.non_tiling_sample(height, width)
            };

            match bucket {
                Some(bucket) => QueryResponse::Answer(bucket.render_sample()),
                None => QueryResponse::Answer(String::from(
                    "no matching sets for this query",
                )),
            }
        }
        _ => QueryResponse::Answer(String::from(
            "queries: 'tiling <height> <width>', 'non-tiling <height> <width>', 'quit'",
        )),
    }
}

#[allow(clippy::print_stdout)]
fn run_query_loop(statistics: &SurveyStatistics) -> Result<()> {
    println!("queries: 'tiling <height> <width>', 'non-tiling <height> <width>', 'quit'");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match answer_query(statistics, &line?) {
            QueryResponse::Answer(text) => println!("{text}"),
            QueryResponse::Quit => break,
        }
    }
    Ok(())
}
