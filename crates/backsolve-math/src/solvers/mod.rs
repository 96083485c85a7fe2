//! Root-finding algorithms.
//!
//! - [`secant`]: Derivative-free method seeded with two starting points
//!
//! The secant method converges superlinearly on smooth, monotone price/rate
//! relationships, which is what discounted cash flows produce. It needs no
//! bracket and no derivative, but can fail when the objective is flat, and
//! it reports that instead of dividing by zero.
//!
//! # Example: yield of a zero coupon cash flow
//!
//! ```rust
//! use backsolve_math::solvers::{secant, SolverConfig};
//!
//! // 100 paid in two years, priced at 90
//! let objective = |y: f64| 90.0 - 100.0 / (1.0 + y).powi(2);
//!
//! let result = secant(objective, 0.06, 0.0625, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.054092553).abs() < 1e-8);
//! ```

mod secant;

pub use secant::secant;

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Largest acceptable |f(x)| at the root.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Trait for root-finding algorithms.
pub trait RootFinder {
    /// Finds a root of the given function.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `config` - Solver configuration
    fn find_root<F>(&self, f: F, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Secant method solver carrying its two starting points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantSolver {
    /// First starting point (x₋₁).
    pub x0: f64,
    /// Second starting point (x₀).
    pub x1: f64,
}

impl SecantSolver {
    /// Creates a secant solver seeded at `x0` and `x1`.
    #[must_use]
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }
}

impl RootFinder for SecantSolver {
    fn find_root<F>(&self, f: F, config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        secant(f, self.x0, self.x1, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
