//! Present value of cash flow streams.
//!
//! Two discounting models are provided:
//!
//! - [`SpreadDiscount`]: per-period reference rate plus a spread, simple
//!   interest within each period, compounded period to period, with a
//!   configurable day-count denominator
//! - [`FlatYieldDiscount`]: a single annually-compounded yield on Act/365,
//!   measured from the first cash flow
//!
//! Both implement [`DiscountModel`], which is what the backsolvers drive.
//!
//! ```text
//! Spread:      DF_t = DF_{t-1} / (1 + (r_t + s) × (d_t − d_{t−1}) / Y),  d_{-1} = 0
//! Flat yield:  DF_t = (1 + y)^(−(d_t − d_0) / 365)
//! PV          = Σ CF_t × DF_t  (− accrued interest if clean)
//! ```

mod flat_yield;
mod spread;

pub use flat_yield::{irr_present_value, FlatYieldDiscount, IRR_DAYS_PER_YEAR};
pub use spread::{spread_present_value, SpreadDiscount};

use backsolve_core::types::{CashFlowEntry, PriceBasis};
use backsolve_core::CoreError;

use crate::error::{AnalyticsError, AnalyticsResult};

/// A discounting model parameterized by a single rate.
///
/// The rate is a spread for [`SpreadDiscount`] and a yield for
/// [`FlatYieldDiscount`].
pub trait DiscountModel {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The clean/dirty basis applied to the discounted sum.
    fn price_basis(&self) -> PriceBasis;

    /// Sum of discounted amounts at `rate`, before any accrued adjustment.
    ///
    /// Returns zero for an empty slice; use [`DiscountModel::present_value`]
    /// when the input has not been validated.
    fn discounted_sum(&self, entries: &[CashFlowEntry], rate: f64) -> f64;

    /// Present value at `rate` on this model's price basis.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidStream`] if `entries` is empty.
    fn present_value(&self, entries: &[CashFlowEntry], rate: f64) -> AnalyticsResult<f64> {
        if entries.is_empty() {
            return Err(AnalyticsError::InvalidStream(CoreError::EmptyStream));
        }
        Ok(self
            .price_basis()
            .apply(self.discounted_sum(entries, rate)))
    }
}
