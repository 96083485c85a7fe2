//! Domain types for cash flow discounting.
//!
//! - [`CashFlowEntry`]: One amount with its day offset and reference rate
//! - [`CashFlowStream`]: Validated, ordered sequence of entries
//! - [`PricingParameters`]: Target price and solver settings for one solve
//! - [`PriceBasis`]: Clean or dirty comparison basis
//! - [`YearConvention`]: Day-count denominator for the spread model

mod params;
mod stream;

pub use params::{
    PriceBasis, PricingParameters, YearConvention, DEFAULT_INITIAL_GUESSES,
    DEFAULT_MAX_ITERATIONS, DEFAULT_RESIDUAL_TOLERANCE,
};
pub use stream::{CashFlowEntry, CashFlowStream};
