//! Pricing parameters for a single solve.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Default residual tolerance on the price difference, in dollars.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-8;

/// Default cap on secant iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default secant starting rates: 6% and 6.25%.
pub const DEFAULT_INITIAL_GUESSES: (f64, f64) = (0.06, 0.0625);

/// Day-count denominator converting day differences into year fractions.
///
/// Used by the spread model only; flat-yield discounting is always Act/365.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum YearConvention {
    /// 360-day year (money market)
    #[default]
    Act360,
    /// 365-day year
    Act365,
    /// Any other positive denominator
    Custom(f64),
}

impl YearConvention {
    /// Returns the number of days in a year under this convention.
    #[must_use]
    pub fn days(self) -> f64 {
        match self {
            YearConvention::Act360 => 360.0,
            YearConvention::Act365 => 365.0,
            YearConvention::Custom(days) => days,
        }
    }

    /// Converts a day count into a year fraction.
    #[must_use]
    pub fn year_fraction(self, days: f64) -> f64 {
        days / self.days()
    }

    /// Checks that the denominator is a finite, positive number of days.
    ///
    /// `Custom` can be built directly, so values that did not come through
    /// parsing or deserialization may need this check.
    pub fn validate(self) -> CoreResult<()> {
        let days = self.days();
        if days.is_finite() && days > 0.0 {
            Ok(())
        } else {
            Err(CoreError::invalid_parameter(
                "year convention",
                format!("must be a positive number of days, got {days}"),
            ))
        }
    }
}

impl TryFrom<f64> for YearConvention {
    type Error = CoreError;

    fn try_from(days: f64) -> CoreResult<Self> {
        let convention = if days == 360.0 {
            YearConvention::Act360
        } else if days == 365.0 {
            YearConvention::Act365
        } else {
            YearConvention::Custom(days)
        };
        convention.validate()?;
        Ok(convention)
    }
}

impl From<YearConvention> for f64 {
    fn from(convention: YearConvention) -> Self {
        convention.days()
    }
}

impl FromStr for YearConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACT/360" | "ACT360" | "A360" => Ok(YearConvention::Act360),
            "ACT/365" | "ACT365" | "A365" => Ok(YearConvention::Act365),
            other => {
                let days = other.parse::<f64>().map_err(|_| {
                    CoreError::invalid_parameter(
                        "year convention",
                        format!("expected ACT/360, ACT/365 or a day count, got '{s}'"),
                    )
                })?;
                YearConvention::try_from(days)
            }
        }
    }
}

impl fmt::Display for YearConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearConvention::Act360 => write!(f, "ACT/360"),
            YearConvention::Act365 => write!(f, "ACT/365"),
            YearConvention::Custom(days) => write!(f, "ACT/{days}"),
        }
    }
}

/// Whether computed PV is compared as dirty, or clean after removing accrued interest.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    /// Raw discounted PV
    #[default]
    Dirty,
    /// Discounted PV less accrued interest
    Clean {
        /// Accrued interest in dollars
        accrued_interest: f64,
    },
}

impl PriceBasis {
    /// Creates a clean basis with the given accrued interest.
    #[must_use]
    pub fn clean(accrued_interest: f64) -> Self {
        PriceBasis::Clean { accrued_interest }
    }

    /// Builds a basis from a clean flag and accrued amount.
    ///
    /// Accrued interest is ignored when `is_clean` is false.
    #[must_use]
    pub fn from_flag(is_clean: bool, accrued_interest: f64) -> Self {
        if is_clean {
            PriceBasis::Clean { accrued_interest }
        } else {
            PriceBasis::Dirty
        }
    }

    /// Returns true for clean pricing.
    #[must_use]
    pub fn is_clean(self) -> bool {
        matches!(self, PriceBasis::Clean { .. })
    }

    /// Returns the accrued interest subtracted under this basis.
    #[must_use]
    pub fn accrued_interest(self) -> f64 {
        match self {
            PriceBasis::Dirty => 0.0,
            PriceBasis::Clean { accrued_interest } => accrued_interest,
        }
    }

    /// Converts a dirty PV to this basis.
    #[must_use]
    pub fn apply(self, dirty_value: f64) -> f64 {
        match self {
            PriceBasis::Dirty => dirty_value,
            PriceBasis::Clean { accrued_interest } => dirty_value - accrued_interest,
        }
    }
}

impl fmt::Display for PriceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBasis::Dirty => write!(f, "dirty"),
            PriceBasis::Clean { accrued_interest } => {
                write!(f, "clean (accrued {accrued_interest})")
            }
        }
    }
}

/// Parameters for one backsolve.
///
/// # Example
///
/// ```rust
/// use backsolve_core::types::{PriceBasis, PricingParameters, YearConvention};
///
/// let params = PricingParameters::new(98.75)
///     .with_residual_tolerance(1e-6)
///     .with_max_iterations(50)
///     .with_price_basis(PriceBasis::clean(0.42))
///     .with_year_convention(YearConvention::Act365);
///
/// assert_eq!(params.max_iterations, 50);
/// assert!(params.price_basis.is_clean());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Target price as a total dollar amount (not a percentage of par)
    pub target_price: f64,
    /// Largest acceptable |target - PV|
    pub residual_tolerance: f64,
    /// Maximum number of secant steps
    pub max_iterations: u32,
    /// Clean or dirty comparison
    pub price_basis: PriceBasis,
    /// Day-count denominator for spread discounting
    pub year_convention: YearConvention,
    /// The two starting rates for the secant iteration
    pub initial_guesses: (f64, f64),
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            target_price: 0.0,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            price_basis: PriceBasis::Dirty,
            year_convention: YearConvention::Act360,
            initial_guesses: DEFAULT_INITIAL_GUESSES,
        }
    }
}

impl PricingParameters {
    /// Creates parameters targeting the given price with default solver settings.
    #[must_use]
    pub fn new(target_price: f64) -> Self {
        Self {
            target_price,
            ..Self::default()
        }
    }

    /// Sets the target price.
    #[must_use]
    pub fn with_target_price(mut self, target_price: f64) -> Self {
        self.target_price = target_price;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the price basis.
    #[must_use]
    pub fn with_price_basis(mut self, price_basis: PriceBasis) -> Self {
        self.price_basis = price_basis;
        self
    }

    /// Sets the year convention.
    #[must_use]
    pub fn with_year_convention(mut self, year_convention: YearConvention) -> Self {
        self.year_convention = year_convention;
        self
    }

    /// Sets the secant starting rates.
    #[must_use]
    pub fn with_initial_guesses(mut self, first: f64, second: f64) -> Self {
        self.initial_guesses = (first, second);
        self
    }

    /// Checks that every parameter is usable by the solver.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.target_price.is_finite() {
            return Err(CoreError::invalid_parameter(
                "target price",
                format!("must be finite, got {}", self.target_price),
            ));
        }
        if !(self.residual_tolerance.is_finite() && self.residual_tolerance >= 0.0) {
            return Err(CoreError::invalid_parameter(
                "residual tolerance",
                format!("must be >= 0, got {}", self.residual_tolerance),
            ));
        }
        if self.max_iterations == 0 {
            return Err(CoreError::invalid_parameter(
                "max iterations",
                "must be at least 1",
            ));
        }
        if !self.price_basis.accrued_interest().is_finite() {
            return Err(CoreError::invalid_parameter(
                "accrued interest",
                "must be finite",
            ));
        }
        self.year_convention.validate()?;

        let (first, second) = self.initial_guesses;
        if !(first.is_finite() && second.is_finite()) || first == second {
            return Err(CoreError::invalid_parameter(
                "initial guesses",
                format!("must be two distinct finite rates, got ({first}, {second})"),
            ));
        }
        Ok(())
    }
}
