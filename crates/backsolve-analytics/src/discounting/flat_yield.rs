//! Flat annually-compounded yield discounting (Act/365).

use backsolve_core::types::{CashFlowEntry, CashFlowStream, PriceBasis, PricingParameters};

use super::DiscountModel;

/// Days per year for flat-yield discounting; not configurable.
pub const IRR_DAYS_PER_YEAR: f64 = 365.0;

/// Discounts every cash flow at one annual yield, measured from the first entry.
///
/// The first cash flow is never discounted, which makes this the natural
/// model for IRR: the first entry is usually the (negative) purchase amount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatYieldDiscount {
    price_basis: PriceBasis,
}

impl FlatYieldDiscount {
    /// Creates a flat-yield model.
    #[must_use]
    pub fn new(price_basis: PriceBasis) -> Self {
        Self { price_basis }
    }

    /// Creates a flat-yield model from pricing parameters.
    ///
    /// The year convention in `params` is ignored.
    #[must_use]
    pub fn from_parameters(params: &PricingParameters) -> Self {
        Self::new(params.price_basis)
    }
}

impl DiscountModel for FlatYieldDiscount {
    fn name(&self) -> &'static str {
        "flat-yield"
    }

    fn price_basis(&self) -> PriceBasis {
        self.price_basis
    }

    fn discounted_sum(&self, entries: &[CashFlowEntry], irr: f64) -> f64 {
        let Some(first) = entries.first() else {
            return 0.0;
        };
        let origin = first.day_offset;

        entries
            .iter()
            .map(|cf| {
                let years = (cf.day_offset - origin) / IRR_DAYS_PER_YEAR;
                cf.amount / (1.0 + irr).powf(years)
            })
            .sum()
    }
}

/// Present value of a stream at a flat annual yield.
///
/// # Example
///
/// ```rust
/// use backsolve_analytics::discounting::irr_present_value;
/// use backsolve_core::types::{CashFlowStream, PriceBasis};
///
/// let stream = CashFlowStream::from_slices_without_rates(&[-100.0, 110.0], &[10.0, 375.0]).unwrap();
/// let npv = irr_present_value(&stream, 0.10, PriceBasis::Dirty);
/// assert!(npv.abs() < 1e-12);
/// ```
#[must_use]
pub fn irr_present_value(stream: &CashFlowStream, irr: f64, price_basis: PriceBasis) -> f64 {
    let model = FlatYieldDiscount::new(price_basis);
    price_basis.apply(model.discounted_sum(stream.entries(), irr))
}
