//! Flat entry points over raw sequences.
//!
//! These mirror the two external operations of the library: they take the
//! plain arrays and scalars a host binding would pass, validate them into a
//! [`CashFlowStream`] and [`PricingParameters`], and return the solved rate.
//! Input problems are reported before any discounting runs.
//!
//! # Example
//!
//! ```rust
//! use backsolve_analytics::functions::{backsolve_irr_rate, backsolve_spread_rate};
//!
//! // Fixed-rate loan: zero reference rates turn the spread into a yield
//! let yield_value = backsolve_spread_rate(
//!     &[100.0], &[365.0], &[0.0], 100.0, 1e-10, 100, false, 0.0, 365.0,
//! )
//! .unwrap();
//! assert!(yield_value.abs() < 1e-10);
//!
//! let irr = backsolve_irr_rate(&[-100.0, 110.0], &[1.0, 366.0], 1e-10, 100, false, 0.0).unwrap();
//! assert!((irr - 0.10).abs() < 1e-9);
//! ```

use backsolve_core::types::{CashFlowStream, PriceBasis, PricingParameters, YearConvention};

use crate::backsolve::{backsolve_irr, backsolve_spread};
use crate::error::AnalyticsResult;

/// Solves for the spread over `reference_rates` that prices the cash flows at
/// `target_price`.
///
/// # Arguments
///
/// * `amounts` - Cash flow amounts in dollars
/// * `day_offsets` - Days from the valuation date, strictly increasing, first > 0
/// * `reference_rates` - Period reference rates (all zero to solve for a yield)
/// * `target_price` - Total dollar price, not a percentage of par
/// * `residual_tolerance` - Largest acceptable |target − PV|, ≥ 0
/// * `max_iterations` - Secant step cap, ≥ 1
/// * `is_clean` - Compare against PV less `accrued_interest`
/// * `accrued_interest` - Used only when `is_clean`
/// * `year_convention` - Day-count denominator, e.g. 360 or 365
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn backsolve_spread_rate(
    amounts: &[f64],
    day_offsets: &[f64],
    reference_rates: &[f64],
    target_price: f64,
    residual_tolerance: f64,
    max_iterations: u32,
    is_clean: bool,
    accrued_interest: f64,
    year_convention: f64,
) -> AnalyticsResult<f64> {
    let stream = CashFlowStream::from_slices(amounts, day_offsets, reference_rates)?;
    let params = PricingParameters::new(target_price)
        .with_residual_tolerance(residual_tolerance)
        .with_max_iterations(max_iterations)
        .with_price_basis(PriceBasis::from_flag(is_clean, accrued_interest))
        .with_year_convention(YearConvention::try_from(year_convention)?);

    backsolve_spread(&stream, &params).map(|result| result.rate)
}

/// Solves for the flat annual yield (Act/365) that zeroes the cash flows' NPV.
///
/// See [`backsolve_spread_rate`] for the meaning of each argument.
pub fn backsolve_irr_rate(
    amounts: &[f64],
    day_offsets: &[f64],
    residual_tolerance: f64,
    max_iterations: u32,
    is_clean: bool,
    accrued_interest: f64,
) -> AnalyticsResult<f64> {
    let stream = CashFlowStream::from_slices_without_rates(amounts, day_offsets)?;
    let params = PricingParameters::default()
        .with_residual_tolerance(residual_tolerance)
        .with_max_iterations(max_iterations)
        .with_price_basis(PriceBasis::from_flag(is_clean, accrued_interest));

    backsolve_irr(&stream, &params).map(|result| result.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use backsolve_core::CoreError;

    #[test]
    fn test_spread_rate_non_increasing_dates() {
        let err = backsolve_spread_rate(
            &[50.0, 50.0],
            &[100.0, 100.0],
            &[0.0, 0.0],
            99.0,
            1e-8,
            100,
            false,
            0.0,
            360.0,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AnalyticsError::InvalidStream(CoreError::NonIncreasingDayOffset { .. })
        ));
    }

    #[test]
    fn test_spread_rate_length_mismatch() {
        let err = backsolve_spread_rate(
            &[50.0, 50.0],
            &[100.0, 200.0],
            &[0.0],
            99.0,
            1e-8,
            100,
            false,
            0.0,
            360.0,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AnalyticsError::InvalidStream(CoreError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_spread_rate_bad_year_convention() {
        let err = backsolve_spread_rate(
            &[100.0],
            &[365.0],
            &[0.0],
            100.0,
            1e-8,
            100,
            false,
            0.0,
            0.0,
        )
        .unwrap_err();

        assert!(matches!(err, AnalyticsError::InvalidParameters(_)));
    }

    #[test]
    fn test_irr_rate_empty() {
        let err = backsolve_irr_rate(&[], &[], 1e-8, 100, false, 0.0).unwrap_err();
        assert_eq!(err, AnalyticsError::InvalidStream(CoreError::EmptyStream));
    }

    #[test]
    fn test_irr_rate_clean() {
        // NPV − 2 = 0 with -98 up front means the dirty NPV must be 2
        let irr = backsolve_irr_rate(&[-98.0, 110.0], &[1.0, 366.0], 1e-10, 100, true, 2.0)
            .unwrap();
        assert!((irr - 0.10).abs() < 1e-9);
    }
}
