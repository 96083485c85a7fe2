//! Error types for discounting and backsolving.
//!
//! Every failure a solve can produce is one of four named outcomes. Lower
//! level errors from `backsolve-core` and `backsolve-math` convert into these
//! without losing their detail.

use thiserror::Error;

use backsolve_core::CoreError;
use backsolve_math::MathError;

/// Error type for analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Empty stream, or day offsets not strictly increasing from after day zero.
    #[error("invalid cash flow stream: {0}")]
    InvalidStream(#[source] CoreError),

    /// A pricing or solver parameter is out of range.
    #[error("invalid pricing parameters: {0}")]
    InvalidParameters(String),

    /// Consecutive residuals were identical, so the next secant step is undefined.
    #[error(
        "value doesn't change when the rate is sensitized (rate {rate}, residual {residual:.6e}, iteration {iteration})"
    )]
    DegenerateStep {
        /// Trial rate at which the residual repeated.
        rate: f64,
        /// The repeated residual.
        residual: f64,
        /// Iteration at which the step was attempted.
        iteration: u32,
    },

    /// The iteration cap was reached before the residual met the tolerance.
    #[error("failed to converge after {iterations} iterations (residual: {residual:.2e})")]
    NonConvergence {
        /// Number of iterations performed.
        iterations: u32,
        /// Final absolute residual.
        residual: f64,
    },
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Returns true for numeric solver failures, as opposed to rejected input.
    #[must_use]
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            AnalyticsError::DegenerateStep { .. } | AnalyticsError::NonConvergence { .. }
        )
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        if err.is_invalid_stream() {
            AnalyticsError::InvalidStream(err)
        } else {
            AnalyticsError::InvalidParameters(err.to_string())
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DegenerateStep {
                x,
                residual,
                iteration,
            } => AnalyticsError::DegenerateStep {
                rate: x,
                residual,
                iteration,
            },
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => AnalyticsError::NonConvergence {
                iterations,
                residual,
            },
            MathError::InvalidInput { reason } => AnalyticsError::InvalidParameters(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::NonConvergence {
            iterations: 100,
            residual: 0.5,
        };
        assert!(err.to_string().contains("100 iterations"));

        let err = AnalyticsError::from(CoreError::EmptyStream);
        assert!(err.to_string().starts_with("invalid cash flow stream"));
    }

    #[test]
    fn test_core_error_conversion() {
        assert!(matches!(
            AnalyticsError::from(CoreError::NonPositiveFirstOffset { offset: 0.0 }),
            AnalyticsError::InvalidStream(CoreError::NonPositiveFirstOffset { .. })
        ));
        assert!(matches!(
            AnalyticsError::from(CoreError::invalid_parameter("max iterations", "zero")),
            AnalyticsError::InvalidParameters(_)
        ));
    }

    #[test]
    fn test_math_error_conversion() {
        let err = AnalyticsError::from(MathError::DegenerateStep {
            x: 0.0625,
            residual: 1.0,
            iteration: 0,
        });
        assert_eq!(
            err,
            AnalyticsError::DegenerateStep {
                rate: 0.0625,
                residual: 1.0,
                iteration: 0,
            }
        );
        assert!(err.is_solver_failure());

        let err = AnalyticsError::from(MathError::convergence_failed(3, 0.1));
        assert!(matches!(
            err,
            AnalyticsError::NonConvergence { iterations: 3, .. }
        ));
        assert!(!AnalyticsError::InvalidParameters(String::new()).is_solver_failure());
    }
}
