//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Roadplan - engineering curriculum catalog and analytics
#[derive(Parser, Debug)]
#[command(name = "rp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding curriculum.yml and gate.yml (default: builtin datasets)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List branches and their profiles
    Branches(BranchesArgs),

    /// Show subject weightages for one semester of a branch
    Subjects(SubjectsArgs),

    /// Show phase aggregates for one or all branches
    Phases(PhasesArgs),

    /// Show the year-wise study roadmap
    Roadmap(RoadmapArgs),

    /// Show the GATE preparation plan
    Gate(GateArgs),

    /// Project catalog data into chart-ready series
    Analytics(AnalyticsArgs),

    /// Validate a curriculum dataset
    Validate,

    /// Serve the catalog and projections as a read-only JSON API
    Serve(ServeArgs),
}

/// Output formats shared by the query commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the branches command
#[derive(Args, Debug)]
pub struct BranchesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the subjects command
#[derive(Args, Debug)]
pub struct SubjectsArgs {
    /// Branch id (CSE, IT, ECE)
    #[arg(short, long)]
    pub branch: String,

    /// Semester ordinal (1-8)
    #[arg(short, long)]
    pub semester: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the phases command
#[derive(Args, Debug)]
pub struct PhasesArgs {
    /// Branch id (default: all branches)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the roadmap command
#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Year ordinal (1-4, default: all years)
    #[arg(short, long)]
    pub year: Option<u8>,
}

/// Arguments for the gate command
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Phase ordinal (1-4, default: all phases)
    #[arg(short, long)]
    pub phase: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Charts the analytics command can project
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Grouped-bar phase weights across branches
    Comparison,
    /// Pie-style phase breakdown of one branch
    Breakdown,
    /// Multi-series semester progression lines
    Progression,
}

/// Arguments for the analytics command
#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// Chart to project (default: all charts as one JSON document)
    #[arg(short, long, value_enum)]
    pub chart: Option<ChartKind>,

    /// Branch id for the breakdown chart (default: every branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: OutputFormat,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
