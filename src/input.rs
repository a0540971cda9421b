//! Command line handling.

use clap::Parser;
use std::path::PathBuf;

use crate::{misc::Settings, statistics::Statistics, Error};

#[derive(Parser, Debug)]
#[command(name = "colsat")]
#[command(version)]
#[command(about = "Reduce graph k-colouring to SAT in DIMACS CNF", long_about = None)]
struct Args {
    /// Graph file in DIMACS syntax (`p edge n m`, `e u v`)
    input: PathBuf,

    /// Number of colours k
    #[arg(short = 'k', long)]
    colours: usize,

    /// CNF output file [default: sat_input_k<k>.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decide the written formula with Kissat
    #[arg(short, long)]
    solve: bool,

    /// Variable order for the solver: default, frequent-vars-first
    #[arg(long, default_value = "default")]
    strategy: String,

    /// Print the formula in logical notation
    #[arg(short, long)]
    print_formula: bool,

    /// Write statistics about the run to this file
    #[arg(long)]
    statistics: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(not(tarpaulin_include))]
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn settings_from_args(args: Args) -> Result<Settings, Error> {
    let mut settings = Settings::new(args.input, args.colours);

    if let Some(output) = args.output {
        settings.output = output;
    }
    settings.solve = args.solve;
    settings.strategy = args.strategy.parse()?;
    settings.print_formula = args.print_formula;
    settings.statistics = args.statistics.map(Statistics::new);

    Ok(settings)
}

/// Parse the command line and set up logging.
#[cfg(not(tarpaulin_include))]
pub fn read_settings() -> Result<Settings, Error> {
    let args = Args::parse();
    init_logger(args.verbose);
    settings_from_args(args)
}
