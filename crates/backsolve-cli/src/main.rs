//! Backsolve CLI - spread and IRR backsolving from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Spread over the reference rates that prices a loan at 98.5
//! backsolve spread --cash-flows loan.csv --price 98.5
//!
//! # Same, against a clean price
//! backsolve spread --cash-flows loan.csv --price 97.9 --clean --accrued 0.6
//!
//! # Internal rate of return of an investment
//! backsolve irr --cash-flows deal.json
//!
//! # Present value at a given spread
//! backsolve pv --cash-flows loan.csv --spread 0.0125
//! ```

use backsolve_analytics::AnalyticsError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        output::print_error(&format!("{err:#}"));
        if let Some(hint) = solver_hint(&err) {
            output::print_warning(hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = commands::resolve_config(&cli)?;
    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Spread(args) => commands::spread::execute(args, &config, format, quiet)?,
        Commands::Irr(args) => commands::irr::execute(args, &config, format, quiet)?,
        Commands::Pv(args) => commands::pv::execute(args, &config, format, quiet)?,
    }

    Ok(())
}

/// Suggests a next step when the solver ran but did not produce a rate.
fn solver_hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<AnalyticsError>() {
        Some(AnalyticsError::DegenerateStep { .. }) => Some(
            "present value does not respond to the rate; check the cash flow amounts",
        ),
        Some(failure) if failure.is_solver_failure() => {
            Some("try a looser --tolerance or a larger --max-iterations")
        }
        _ => None,
    }
}

/// Logs go to stderr so `--format json` output stays parseable.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
