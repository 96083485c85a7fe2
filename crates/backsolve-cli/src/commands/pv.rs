//! Present value command implementation.
//!
//! Prices a stream at a given spread (spread model) or yield (Act/365 flat
//! yield model) without solving.

use anyhow::Result;
use clap::{ArgGroup, Args};
use serde::Serialize;

use backsolve_analytics::discounting::{DiscountModel, FlatYieldDiscount, SpreadDiscount};
use backsolve_config::BacksolveConfig;
use backsolve_core::types::YearConvention;

use crate::cli::OutputFormat;
use crate::commands::StreamArgs;
use crate::output::{print_report, KeyValue, Report};

/// Arguments for the pv command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("rate").required(true).args(["spread", "yield_rate"])))]
pub struct PvArgs {
    #[command(flatten)]
    pub input: StreamArgs,

    /// Spread over the reference rates (decimal, 0.01 = 100bp)
    #[arg(long, allow_hyphen_values = true)]
    pub spread: Option<f64>,

    /// Flat annual yield, Act/365 from the first cash flow (decimal)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_rate: Option<f64>,

    /// Days per year for --spread: ACT/360, ACT/365 or a positive day count
    #[arg(long, value_name = "DAYS", conflicts_with = "yield_rate")]
    pub year_convention: Option<YearConvention>,
}

/// Present value at a fixed rate.
#[derive(Debug, Clone, Serialize)]
pub struct PvReport {
    pub model: &'static str,
    pub rate: f64,
    pub present_value: f64,
    pub price_basis: String,
    pub year_convention: String,
    pub cash_flows: usize,
}

impl Report for PvReport {
    fn title(&self) -> &'static str {
        "Present Value"
    }

    fn rows(&self) -> Vec<KeyValue> {
        let label = match self.model {
            "spread" => "Spread",
            _ => "Yield",
        };

        vec![
            KeyValue::from_f64("Present Value", self.present_value, 6),
            KeyValue::from_percent(label, self.rate),
            KeyValue::new("Model", self.model),
            KeyValue::new("Price Basis", self.price_basis.clone()),
            KeyValue::new("Year Convention", self.year_convention.clone()),
            KeyValue::new("Cash Flows", self.cash_flows.to_string()),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.10}", self.present_value)
    }
}

/// Execute the pv command.
pub fn execute(
    args: PvArgs,
    config: &BacksolveConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let stream = args.input.load()?;
    let price_basis = args.input.price_basis(config.pricing.price_basis)?;

    let (model, rate, year_convention): (Box<dyn DiscountModel>, f64, YearConvention) =
        match (args.spread, args.yield_rate) {
            (Some(spread), _) => {
                let convention = args
                    .year_convention
                    .unwrap_or(config.pricing.year_convention);
                (
                    Box::new(SpreadDiscount::new(convention, price_basis)),
                    spread,
                    convention,
                )
            }
            (None, Some(yield_rate)) => (
                Box::new(FlatYieldDiscount::new(price_basis)),
                yield_rate,
                YearConvention::Act365,
            ),
            (None, None) => anyhow::bail!("one of --spread or --yield is required"),
        };

    let present_value = model.present_value(stream.entries(), rate)?;
    tracing::debug!(model = model.name(), rate, present_value, "priced stream");

    let report = PvReport {
        model: model.name(),
        rate,
        present_value,
        price_basis: price_basis.to_string(),
        year_convention: year_convention.to_string(),
        cash_flows: stream.len(),
    };
    print_report(&report, format, quiet)
}
