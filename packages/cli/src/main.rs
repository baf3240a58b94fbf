mod commands;

use clap::{Parser, Subcommand};
use commands::{apply, inspect, ApplyArgs, InspectArgs};
use tracing_subscriber::EnvFilter;

/// Posterkit CLI - structured mutation engine for poster documents
#[derive(Parser, Debug)]
#[command(name = "posterkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical snapshot of a container as pruned JSON
    Inspect(InspectArgs),

    /// Apply a command batch to a container and save the result
    Apply(ApplyArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect(args) => inspect::run(args),
        Command::Apply(args) => apply::run(args),
    }
}
