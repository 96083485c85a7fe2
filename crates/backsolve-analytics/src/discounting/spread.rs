//! Reference-rate-plus-spread discounting.

use backsolve_core::types::{
    CashFlowEntry, CashFlowStream, PriceBasis, PricingParameters, YearConvention,
};

use super::DiscountModel;
use crate::error::AnalyticsResult;

/// Discounts each period at its reference rate plus a constant spread.
///
/// Discount factors accumulate from day zero: each period's factor divides
/// the previous one by `1 + (reference_rate + spread) × days / year`.
/// Passing all-zero reference rates turns the spread into a yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadDiscount {
    year_convention: YearConvention,
    price_basis: PriceBasis,
}

impl SpreadDiscount {
    /// Creates a spread model.
    ///
    /// The convention is not re-checked here; conventions from parsing,
    /// deserialization or validated [`PricingParameters`] are already valid.
    #[must_use]
    pub fn new(year_convention: YearConvention, price_basis: PriceBasis) -> Self {
        Self {
            year_convention,
            price_basis,
        }
    }

    /// Creates a spread model from pricing parameters.
    #[must_use]
    pub fn from_parameters(params: &PricingParameters) -> Self {
        Self::new(params.year_convention, params.price_basis)
    }

    /// Returns the day-count denominator.
    #[must_use]
    pub fn year_convention(&self) -> YearConvention {
        self.year_convention
    }
}

impl DiscountModel for SpreadDiscount {
    fn name(&self) -> &'static str {
        "spread"
    }

    fn price_basis(&self) -> PriceBasis {
        self.price_basis
    }

    fn discounted_sum(&self, entries: &[CashFlowEntry], spread: f64) -> f64 {
        let mut discount_factor = 1.0;
        let mut previous_offset = 0.0;
        let mut pv = 0.0;

        for cf in entries {
            let period_rate = cf.reference_rate + spread;
            let accrual = self
                .year_convention
                .year_fraction(cf.day_offset - previous_offset);
            discount_factor /= 1.0 + period_rate * accrual;
            pv += cf.amount * discount_factor;
            previous_offset = cf.day_offset;
        }
        pv
    }
}

/// Present value of a stream under reference-rate-plus-spread discounting.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidParameters`] if the year convention is
/// not a finite, positive number of days.
///
/// [`AnalyticsError::InvalidParameters`]: crate::AnalyticsError::InvalidParameters
///
/// # Example
///
/// ```rust
/// use backsolve_analytics::discounting::spread_present_value;
/// use backsolve_core::types::{CashFlowStream, PriceBasis, YearConvention};
///
/// let stream = CashFlowStream::from_slices(&[105.0], &[360.0], &[0.04]).unwrap();
/// let pv = spread_present_value(&stream, 0.01, YearConvention::Act360, PriceBasis::Dirty).unwrap();
/// assert!((pv - 100.0).abs() < 1e-12);
/// ```
pub fn spread_present_value(
    stream: &CashFlowStream,
    spread: f64,
    year_convention: YearConvention,
    price_basis: PriceBasis,
) -> AnalyticsResult<f64> {
    year_convention.validate()?;
    let model = SpreadDiscount::new(year_convention, price_basis);
    Ok(price_basis.apply(model.discounted_sum(stream.entries(), spread)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;
    use approx::assert_relative_eq;

    fn floating_stream() -> CashFlowStream {
        CashFlowStream::from_slices(
            &[1.25, 1.30, 101.35],
            &[90.0, 181.0, 273.0],
            &[0.050, 0.052, 0.054],
        )
        .unwrap()
    }

    #[test]
    fn test_single_period() {
        let stream = CashFlowStream::from_slices(&[100.0], &[365.0], &[0.0]).unwrap();

        let pv = spread_present_value(&stream, 0.0, YearConvention::Act365, PriceBasis::Dirty).unwrap();
        assert_relative_eq!(pv, 100.0, epsilon = 1e-12);

        let pv = spread_present_value(&stream, 0.05, YearConvention::Act365, PriceBasis::Dirty).unwrap();
        assert_relative_eq!(pv, 100.0 / 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_cumulative_discount_factor() {
        let stream = floating_stream();
        let spread = 0.01;

        let df1 = 1.0 / (1.0 + 0.060 * 90.0 / 360.0);
        let df2 = df1 / (1.0 + 0.062 * 91.0 / 360.0);
        let df3 = df2 / (1.0 + 0.064 * 92.0 / 360.0);
        let expected = 1.25 * df1 + 1.30 * df2 + 101.35 * df3;

        let pv = spread_present_value(&stream, spread, YearConvention::Act360, PriceBasis::Dirty).unwrap();
        assert_relative_eq!(pv, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_year_convention_changes_pv() {
        let stream = floating_stream();

        let pv_360 =
            spread_present_value(&stream, 0.01, YearConvention::Act360, PriceBasis::Dirty).unwrap();
        let pv_365 =
            spread_present_value(&stream, 0.01, YearConvention::Act365, PriceBasis::Dirty).unwrap();

        // Shorter year means more interest per day, so more discounting
        assert!(pv_360 < pv_365);
    }

    #[test]
    fn test_clean_subtracts_accrued() {
        let stream = floating_stream();

        let dirty = spread_present_value(&stream, 0.02, YearConvention::Act360, PriceBasis::Dirty).unwrap();
        let clean = spread_present_value(
            &stream,
            0.02,
            YearConvention::Act360,
            PriceBasis::clean(0.75),
        )
        .unwrap();

        assert_relative_eq!(clean, dirty - 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_pv_decreases_with_spread() {
        let stream = floating_stream();
        let model = SpreadDiscount::new(YearConvention::Act360, PriceBasis::Dirty);

        let low = model.discounted_sum(stream.entries(), -0.01);
        let mid = model.discounted_sum(stream.entries(), 0.0);
        let high = model.discounted_sum(stream.entries(), 0.03);

        assert!(low > mid && mid > high);
    }

    #[test]
    fn test_from_parameters() {
        let params = PricingParameters::new(99.0)
            .with_year_convention(YearConvention::Act365)
            .with_price_basis(PriceBasis::clean(0.3));
        let model = SpreadDiscount::from_parameters(&params);

        assert_eq!(model.year_convention(), YearConvention::Act365);
        assert_eq!(model.price_basis(), PriceBasis::clean(0.3));
    }

    #[test]
    fn test_invalid_convention_rejected() {
        let stream = floating_stream();

        for convention in [YearConvention::Custom(0.0), YearConvention::Custom(-360.0)] {
            let err = spread_present_value(&stream, 0.01, convention, PriceBasis::Dirty)
                .unwrap_err();
            assert!(matches!(err, AnalyticsError::InvalidParameters(_)));
        }
    }
}
