//! escompat CLI - command-line driver for the escompat analyzer
//!
//! Finds uses of JavaScript APIs that are unavailable on a target runtime.

mod commands;
mod output;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "escompat",
    version,
    about = "Static source-compatibility checker for JavaScript APIs",
    long_about = "escompat scans JavaScript sources for accesses to APIs that a target\n\
                  runtime does not support, reporting only the usages that would actually\n\
                  execute (feature-detection probes are deliberately left alone)."
)]
pub struct Cli {
    /// Raise the default log level to debug (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Rules(args) => args.run(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
