//! # Backsolve Analytics
//!
//! Discounting and backsolving for cash flow streams.
//!
//! This crate binds the discounting models to the secant solver:
//! - **Discounting**: Present value under reference-rate-plus-spread or a
//!   flat annual yield, on a clean or dirty basis
//! - **Backsolve**: The spread that reproduces a target price, and the IRR
//!   that zeroes NPV
//! - **Functions**: Flat entry points over raw arrays for host bindings
//!
//! ## Architecture
//!
//! `backsolve-analytics` depends on `backsolve-core` for validated inputs and
//! on `backsolve-math` for the root finder. The solver never sees a cash
//! flow; it is handed `target − PV(rate)` as a closure built from a
//! [`DiscountModel`](discounting::DiscountModel).
//!
//! ## Usage
//!
//! ```rust
//! use backsolve_analytics::prelude::*;
//! use backsolve_core::prelude::*;
//!
//! let stream = CashFlowStream::from_slices_without_rates(
//!     &[-1000.0, 300.0, 400.0, 500.0],
//!     &[1.0, 366.0, 731.0, 1096.0],
//! )
//! .unwrap();
//!
//! let irr = backsolve_irr(&stream, &PricingParameters::default()).unwrap();
//! assert!((irr.rate - 0.0889633947).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backsolve;
pub mod discounting;
pub mod error;
pub mod functions;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backsolve::{backsolve, backsolve_irr, backsolve_spread, BacksolveResult};
    pub use crate::discounting::{
        irr_present_value, spread_present_value, DiscountModel, FlatYieldDiscount,
        SpreadDiscount, IRR_DAYS_PER_YEAR,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::functions::{backsolve_irr_rate, backsolve_spread_rate};
}
