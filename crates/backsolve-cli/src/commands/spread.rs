//! Spread command implementation.
//!
//! Solves for the spread over each cash flow's reference rate that prices
//! the stream at a target.

use anyhow::{Context, Result};
use clap::Args;

use backsolve_analytics::backsolve::backsolve_spread;
use backsolve_config::BacksolveConfig;
use backsolve_core::types::YearConvention;

use crate::cli::OutputFormat;
use crate::commands::{SolveReport, StreamArgs};
use crate::output::print_report;

/// Arguments for the spread command.
#[derive(Args, Debug)]
pub struct SpreadArgs {
    #[command(flatten)]
    pub input: StreamArgs,

    /// Target price as a total dollar amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: f64,

    /// Days per year: ACT/360, ACT/365 or a positive day count
    #[arg(long, value_name = "DAYS")]
    pub year_convention: Option<YearConvention>,
}

/// Execute the spread command.
pub fn execute(
    args: SpreadArgs,
    config: &BacksolveConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let stream = args.input.load()?;
    let price_basis = args.input.price_basis(config.pricing.price_basis)?;
    let year_convention = args
        .year_convention
        .unwrap_or(config.pricing.year_convention);

    let params = config
        .pricing_parameters(args.price)
        .with_price_basis(price_basis)
        .with_year_convention(year_convention);

    let result = backsolve_spread(&stream, &params).with_context(|| {
        format!(
            "spread backsolve for {} at price {} failed",
            args.input.cash_flows.display(),
            args.price
        )
    })?;

    let report = SolveReport::new(
        "spread",
        &stream,
        params.target_price,
        &params,
        year_convention,
        result,
    );
    print_report(&report, format, quiet)
}
