//! Spread and IRR backsolving.
//!
//! A backsolve inverts a [`DiscountModel`]: given a target price it finds the
//! rate at which `target − PV(rate)` is within tolerance of zero. Both public
//! solves share one secant loop; only the model differs.
//!
//! # Example
//!
//! ```rust
//! use backsolve_analytics::backsolve::backsolve_spread;
//! use backsolve_core::types::{CashFlowStream, PricingParameters, YearConvention};
//!
//! let stream = CashFlowStream::from_slices(
//!     &[1.5, 1.5, 101.5],
//!     &[91.0, 182.0, 273.0],
//!     &[0.045, 0.046, 0.047],
//! )
//! .unwrap();
//!
//! let params = PricingParameters::new(99.5)
//!     .with_residual_tolerance(1e-9)
//!     .with_year_convention(YearConvention::Act360);
//!
//! let result = backsolve_spread(&stream, &params).unwrap();
//! assert!(result.rate > 0.0);
//! assert!(result.residual.abs() <= 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use backsolve_core::types::{CashFlowStream, PricingParameters};
use backsolve_math::solvers::{RootFinder, SecantSolver, SolverConfig};

use crate::discounting::{DiscountModel, FlatYieldDiscount, SpreadDiscount};
use crate::error::AnalyticsResult;

/// Outcome of a successful backsolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacksolveResult {
    /// Solved spread or yield, as a decimal (0.01 = 100bp).
    pub rate: f64,
    /// Secant steps taken.
    pub iterations: u32,
    /// `target − PV(rate)` at the solution.
    pub residual: f64,
}

impl BacksolveResult {
    /// Returns the rate in basis points.
    #[must_use]
    pub fn rate_bps(&self) -> f64 {
        self.rate * 10_000.0
    }
}

/// Finds the rate at which `model` prices `stream` at `target_price`.
///
/// Solver tolerance, iteration cap and starting guesses come from `params`;
/// the target is passed separately so IRR can pin it at zero.
///
/// # Errors
///
/// * [`AnalyticsError::InvalidParameters`] if `params` fail validation
/// * [`AnalyticsError::DegenerateStep`] if PV does not respond to the rate
/// * [`AnalyticsError::NonConvergence`] if the iteration cap is exhausted
///
/// [`AnalyticsError::InvalidParameters`]: crate::AnalyticsError::InvalidParameters
/// [`AnalyticsError::DegenerateStep`]: crate::AnalyticsError::DegenerateStep
/// [`AnalyticsError::NonConvergence`]: crate::AnalyticsError::NonConvergence
pub fn backsolve<M: DiscountModel>(
    model: &M,
    stream: &CashFlowStream,
    target_price: f64,
    params: &PricingParameters,
) -> AnalyticsResult<BacksolveResult> {
    params.validate()?;

    let entries = stream.entries();
    let basis = model.price_basis();
    let objective = |rate: f64| target_price - basis.apply(model.discounted_sum(entries, rate));

    let (x0, x1) = params.initial_guesses;
    let solver = SecantSolver::new(x0, x1);
    let config = SolverConfig::new(params.residual_tolerance, params.max_iterations);

    let result = solver.find_root(objective, &config).map_err(|err| {
        log::debug!(
            "{} backsolve over {} cash flows failed ({} solver): {}",
            model.name(),
            stream.len(),
            solver.name(),
            err
        );
        err
    })?;

    log::debug!(
        "{} backsolve converged to {:.10} in {} iterations (residual {:.3e})",
        model.name(),
        result.root,
        result.iterations,
        result.residual
    );

    Ok(BacksolveResult {
        rate: result.root,
        iterations: result.iterations,
        residual: result.residual,
    })
}

/// Solves for the spread over the reference rates that prices the stream at
/// `params.target_price`.
///
/// When every reference rate is zero the result is a yield under the
/// stream's year convention.
pub fn backsolve_spread(
    stream: &CashFlowStream,
    params: &PricingParameters,
) -> AnalyticsResult<BacksolveResult> {
    backsolve(
        &SpreadDiscount::from_parameters(params),
        stream,
        params.target_price,
        params,
    )
}

/// Solves for the flat annual yield (Act/365) at which the stream's NPV is zero.
///
/// `params.target_price` and `params.year_convention` are ignored; the
/// target is always 0.0.
pub fn backsolve_irr(
    stream: &CashFlowStream,
    params: &PricingParameters,
) -> AnalyticsResult<BacksolveResult> {
    backsolve(
        &FlatYieldDiscount::from_parameters(params),
        stream,
        0.0,
        params,
    )
}
