//! Error types for numerical solvers.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Two consecutive residuals were identical, so the secant slope is undefined.
    #[error(
        "value doesn't change when the rate is sensitized: f({x}) = {residual:.6e} repeated at iteration {iteration}"
    )]
    DegenerateStep {
        /// Trial point at which the residual repeated.
        x: f64,
        /// The repeated residual.
        residual: f64,
        /// Iteration at which the step was attempted.
        iteration: u32,
    },

    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final absolute residual.
        residual: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
