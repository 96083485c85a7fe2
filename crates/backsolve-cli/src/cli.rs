//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{IrrArgs, PvArgs, SpreadArgs};

/// Backsolve - spread and IRR solving for dated cash flow streams
#[derive(Parser)]
#[command(name = "backsolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true, env = "BACKSOLVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Largest acceptable |target - PV|, overriding the configuration
    #[arg(long, global = true)]
    pub tolerance: Option<f64>,

    /// Iteration cap, overriding the configuration
    #[arg(long, global = true)]
    pub max_iterations: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Solve for the spread over the reference rates that matches a price
    Spread(SpreadArgs),

    /// Solve for the internal rate of return (Act/365, annual compounding)
    Irr(IrrArgs),

    /// Present value at a given spread or yield
    Pv(PvArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
