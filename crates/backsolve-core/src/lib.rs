//! # Backsolve Core
//!
//! Core types for the Backsolve cash flow analytics library.
//!
//! This crate provides the inputs every solve is built from:
//!
//! - **Cash flow streams**: Validated, ordered amounts keyed by day offset, with
//!   the per-period reference rate used by floating-rate discounting
//! - **Pricing parameters**: Target price, solver tolerance and iteration cap,
//!   clean/dirty basis and the day-count denominator
//!
//! ## Design Philosophy
//!
//! - **Validate Once**: A [`CashFlowStream`](types::CashFlowStream) cannot be
//!   built from bad data, so downstream code never re-checks ordering
//! - **Explicit Over Implicit**: Failures are named error variants, never
//!   sentinel numbers
//!
//! ## Example
//!
//! ```rust
//! use backsolve_core::prelude::*;
//!
//! let stream = CashFlowStream::from_slices(
//!     &[5.0, 5.0, 105.0],
//!     &[180.0, 360.0, 540.0],
//!     &[0.03, 0.031, 0.032],
//! )
//! .unwrap();
//! assert_eq!(stream.len(), 3);
//!
//! let params = PricingParameters::new(101.25)
//!     .with_year_convention(YearConvention::Act360)
//!     .with_price_basis(PriceBasis::clean(1.1));
//! assert!(params.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        CashFlowEntry, CashFlowStream, PriceBasis, PricingParameters, YearConvention,
        DEFAULT_INITIAL_GUESSES, DEFAULT_MAX_ITERATIONS, DEFAULT_RESIDUAL_TOLERANCE,
    };
}

pub use error::{CoreError, CoreResult};
