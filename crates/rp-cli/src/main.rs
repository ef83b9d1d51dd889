//! Roadplan CLI - curriculum catalog queries and chart projections

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{analytics, branches, gate, phases, roadmap, serve, subjects, validate};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Branches(args) => branches::execute(args, &cli.global).await,
        cli::Commands::Subjects(args) => subjects::execute(args, &cli.global).await,
        cli::Commands::Phases(args) => phases::execute(args, &cli.global).await,
        cli::Commands::Roadmap(args) => roadmap::execute(args, &cli.global).await,
        cli::Commands::Gate(args) => gate::execute(args, &cli.global).await,
        cli::Commands::Analytics(args) => analytics::execute(args, &cli.global).await,
        cli::Commands::Validate => validate::execute(&cli.global).await,
        cli::Commands::Serve(args) => serve::execute(args, &cli.global).await,
    }
}
