//! IRR command implementation.

use anyhow::{Context, Result};
use clap::Args;

use backsolve_analytics::backsolve::backsolve_irr;
use backsolve_config::BacksolveConfig;
use backsolve_core::types::YearConvention;

use crate::cli::OutputFormat;
use crate::commands::{SolveReport, StreamArgs};
use crate::output::print_report;

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    #[command(flatten)]
    pub input: StreamArgs,
}

/// Execute the irr command.
pub fn execute(
    args: IrrArgs,
    config: &BacksolveConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let stream = args.input.load()?;
    let price_basis = args.input.price_basis(config.pricing.price_basis)?;

    let params = config
        .pricing_parameters(0.0)
        .with_price_basis(price_basis);

    let result = backsolve_irr(&stream, &params).with_context(|| {
        format!("IRR backsolve for {} failed", args.input.cash_flows.display())
    })?;

    // IRR discounting is always Act/365 regardless of configuration
    let report = SolveReport::new(
        "irr",
        &stream,
        0.0,
        &params,
        YearConvention::Act365,
        result,
    );
    print_report(&report, format, quiet)
}
