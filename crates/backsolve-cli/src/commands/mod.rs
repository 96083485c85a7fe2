//! CLI command implementations.

pub mod irr;
pub mod pv;
pub mod spread;

pub use irr::IrrArgs;
pub use pv::PvArgs;
pub use spread::SpreadArgs;

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use backsolve_analytics::backsolve::BacksolveResult;
use backsolve_config::{BacksolveConfig, Validate};
use backsolve_core::types::{CashFlowStream, PriceBasis, PricingParameters, YearConvention};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::input::load_cash_flows;
use crate::output::{KeyValue, Report};

/// Loads the configuration file, if any, and applies command-line overrides.
pub fn resolve_config(cli: &Cli) -> CliResult<BacksolveConfig> {
    let mut config = match &cli.config {
        Some(path) => BacksolveConfig::from_path(path)?,
        None => BacksolveConfig::default(),
    };

    if let Some(tolerance) = cli.tolerance {
        config.solver.residual_tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.solver.max_iterations = max_iterations;
    }

    config.validate_or_error()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Cash flow input shared by every command.
#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Cash flow file (.csv with amount,day_offset[,reference_rate] or .json)
    #[arg(long = "cash-flows", value_name = "FILE")]
    pub cash_flows: PathBuf,

    /// Compare against a clean price (PV less accrued interest)
    #[arg(long)]
    pub clean: bool,

    /// Accrued interest removed on a clean basis
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub accrued: Option<f64>,
}

impl StreamArgs {
    /// Reads the cash flow file.
    pub fn load(&self) -> CliResult<CashFlowStream> {
        load_cash_flows(&self.cash_flows)
    }

    /// Resolves the price basis against the configured default.
    ///
    /// `--accrued` alone only makes sense when the default is already clean.
    pub fn price_basis(&self, default: PriceBasis) -> CliResult<PriceBasis> {
        if self.clean || default.is_clean() {
            let accrued = self.accrued.unwrap_or(default.accrued_interest());
            return Ok(PriceBasis::clean(accrued));
        }

        match self.accrued {
            Some(_) => Err(CliError::InvalidArgument(
                "--accrued requires --clean".to_string(),
            )),
            None => Ok(PriceBasis::Dirty),
        }
    }
}

/// Result of a spread or IRR solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub model: &'static str,
    pub rate: f64,
    pub rate_bps: f64,
    pub iterations: u32,
    pub residual: f64,
    pub target_price: f64,
    pub price_basis: String,
    pub year_convention: String,
    pub cash_flows: usize,
}

impl SolveReport {
    pub fn new(
        model: &'static str,
        stream: &CashFlowStream,
        target_price: f64,
        params: &PricingParameters,
        year_convention: YearConvention,
        result: BacksolveResult,
    ) -> Self {
        Self {
            model,
            rate: result.rate,
            rate_bps: result.rate_bps(),
            iterations: result.iterations,
            residual: result.residual,
            target_price,
            price_basis: params.price_basis.to_string(),
            year_convention: year_convention.to_string(),
            cash_flows: stream.len(),
        }
    }
}

impl Report for SolveReport {
    fn title(&self) -> &'static str {
        match self.model {
            "irr" => "IRR Backsolve",
            _ => "Spread Backsolve",
        }
    }

    fn rows(&self) -> Vec<KeyValue> {
        let label = match self.model {
            "irr" => "IRR",
            _ => "Spread",
        };

        vec![
            KeyValue::from_percent(label, self.rate),
            KeyValue::from_bps(format!("{label} (bps)"), self.rate),
            KeyValue::new("Iterations", self.iterations.to_string()),
            KeyValue::from_sci("Residual", self.residual),
            KeyValue::from_f64("Target Price", self.target_price, 6),
            KeyValue::new("Price Basis", self.price_basis.clone()),
            KeyValue::new("Year Convention", self.year_convention.clone()),
            KeyValue::new("Cash Flows", self.cash_flows.to_string()),
        ]
    }

    fn headline(&self) -> String {
        format!("{:.10}", self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(clean: bool, accrued: Option<f64>) -> StreamArgs {
        StreamArgs {
            cash_flows: PathBuf::from("flows.csv"),
            clean,
            accrued,
        }
    }

    #[test]
    fn test_price_basis_defaults_to_config() {
        assert_eq!(
            args(false, None).price_basis(PriceBasis::Dirty).unwrap(),
            PriceBasis::Dirty
        );
        assert_eq!(
            args(false, None).price_basis(PriceBasis::clean(0.3)).unwrap(),
            PriceBasis::clean(0.3)
        );
    }

    #[test]
    fn test_price_basis_flags() {
        assert_eq!(
            args(true, Some(1.2)).price_basis(PriceBasis::Dirty).unwrap(),
            PriceBasis::clean(1.2)
        );
        assert_eq!(
            args(true, None).price_basis(PriceBasis::Dirty).unwrap(),
            PriceBasis::clean(0.0)
        );
        assert_eq!(
            args(false, Some(0.9)).price_basis(PriceBasis::clean(0.3)).unwrap(),
            PriceBasis::clean(0.9)
        );
    }

    #[test]
    fn test_accrued_without_clean_is_rejected() {
        assert!(matches!(
            args(false, Some(0.5)).price_basis(PriceBasis::Dirty),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_solve_report_rows() {
        let stream = CashFlowStream::from_slices_without_rates(&[-100.0, 110.0], &[1.0, 366.0])
            .unwrap();
        let params = PricingParameters::default();
        let result = BacksolveResult {
            rate: 0.1,
            iterations: 3,
            residual: 1e-12,
        };

        let report = SolveReport::new("irr", &stream, 0.0, &params, YearConvention::Act365, result);

        assert_eq!(report.title(), "IRR Backsolve");
        assert_eq!(report.headline(), "0.1000000000");
        assert_eq!(report.rows()[0].key, "IRR");
        assert_eq!(report.cash_flows, 2);
    }
}
