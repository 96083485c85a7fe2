//! # Backsolve Math
//!
//! Numerical utilities for the Backsolve cash flow analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: A derivative-free secant root finder that any scalar
//!   objective can drive, with explicit degenerate-step and
//!   non-convergence failures
//!
//! ## Design Philosophy
//!
//! - **Model Agnostic**: Solvers see only `Fn(f64) -> f64`; discounting
//!   lives elsewhere
//! - **No Sentinels**: Every failure is a [`MathError`] variant

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{secant, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
