//! Secant root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but approximates the derivative from the two
/// most recent trial points. Does not require an analytical derivative or a
/// bracketing interval.
///
/// Each pass first checks `|f(x)| <= tolerance`, then the iteration cap,
/// then whether the last two residuals are exactly equal. Equality is
/// compared without an epsilon: identical residuals mean the trial point had
/// no effect on `f`, and the next step would divide by zero.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::InvalidInput`] if the tolerance is negative or NaN
/// * [`MathError::DegenerateStep`] if two consecutive residuals are identical
/// * [`MathError::ConvergenceFailed`] if the iteration cap is reached first
///
/// # Example
///
/// ```rust
/// use backsolve_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if config.tolerance.is_nan() || config.tolerance < 0.0 {
        return Err(MathError::invalid_input(format!(
            "tolerance must be >= 0, got {}",
            config.tolerance
        )));
    }

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);
    let mut iteration = 0;

    loop {
        if f_curr.abs() <= config.tolerance {
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        if iteration >= config.max_iterations {
            log::debug!(
                "secant failed to converge after {} iterations at x = {}, residual {:.3e}",
                iteration,
                x_curr,
                f_curr
            );
            return Err(MathError::convergence_failed(iteration, f_curr.abs()));
        }

        if f_curr == f_prev {
            log::debug!(
                "secant step undefined at iteration {}: f({}) == f({}) == {:.6e}",
                iteration,
                x_prev,
                x_curr,
                f_curr
            );
            return Err(MathError::DegenerateStep {
                x: x_curr,
                residual: f_curr,
                iteration,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f(x_curr);
        iteration += 1;

        log::trace!(
            "secant iteration {}: x = {:.12}, f(x) = {:.6e}",
            iteration,
            x_curr,
            f_curr
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.residual.abs() <= 1e-10);
    }

    #[test]
    fn test_cube_root() {
        let f = |x: f64| x * x * x - 27.0;

        let result = secant(f, 2.0, 4.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_converged_at_seed() {
        // Second guess is already a root: no steps taken
        let f = |x: f64| x - 0.0625;

        let result = secant(f, 0.06, 0.0625, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 0.0625);
    }

    #[test]
    fn test_linear_converges_in_one_step() {
        let f = |x: f64| 2.0 * x - 0.1;

        let result = secant(f, 0.06, 0.0625, &SolverConfig::new(1e-12, 10)).unwrap();

        assert_eq!(result.iterations, 1);
        assert_relative_eq!(result.root, 0.05, epsilon = 1e-14);
    }

    #[test]
    fn test_flat_function_is_degenerate() {
        let f = |_: f64| 42.0;

        let err = secant(f, 0.06, 0.0625, &SolverConfig::default()).unwrap_err();

        assert_eq!(
            err,
            MathError::DegenerateStep {
                x: 0.0625,
                residual: 42.0,
                iteration: 0,
            }
        );
    }

    #[test]
    fn test_iteration_cap() {
        let f = |x: f64| x.exp() - 5.0;

        let err = secant(f, 0.06, 0.0625, &SolverConfig::new(0.0, 1)).unwrap_err();

        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => {
                assert_eq!(iterations, 1);
                assert!(residual > 0.0);
            }
            other => panic!("expected ConvergenceFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_iterations_allows_seed_check_only() {
        let f = |x: f64| x - 0.0625;
        assert!(secant(f, 0.06, 0.0625, &SolverConfig::new(0.0, 0)).is_ok());

        let g = |x: f64| x - 0.5;
        assert!(matches!(
            secant(g, 0.06, 0.0625, &SolverConfig::new(0.0, 0)),
            Err(MathError::ConvergenceFailed { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_nan_residual_never_converges() {
        let f = |_: f64| f64::NAN;

        let err = secant(f, 0.06, 0.0625, &SolverConfig::new(1e-8, 5)).unwrap_err();

        assert!(matches!(err, MathError::ConvergenceFailed { iterations: 5, .. }));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let f = |x: f64| x;
        assert!(matches!(
            secant(f, 0.06, 0.0625, &SolverConfig::new(-1.0, 10)),
            Err(MathError::InvalidInput { .. })
        ));
        assert!(matches!(
            secant(f, 0.06, 0.0625, &SolverConfig::new(f64::NAN, 10)),
            Err(MathError::InvalidInput { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_finds_root_of_increasing_line(root in -0.5f64..0.5, slope in 0.1f64..1000.0) {
            let f = |x: f64| slope * (x - root);

            let result = secant(f, 0.06, 0.0625, &SolverConfig::new(1e-9, 50)).unwrap();

            prop_assert!(f(result.root).abs() <= 1e-9);
        }
    }
}
