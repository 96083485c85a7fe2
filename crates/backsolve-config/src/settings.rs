//! Backsolve configuration: solver settings and pricing defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use backsolve_core::types::{
    PriceBasis, PricingParameters, YearConvention, DEFAULT_INITIAL_GUESSES,
    DEFAULT_MAX_ITERATIONS, DEFAULT_RESIDUAL_TOLERANCE,
};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Top-level configuration loaded from TOML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacksolveConfig {
    /// Secant solver settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Discounting defaults.
    #[serde(default)]
    pub pricing: PricingDefaults,
}

/// Settings passed through to the secant solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Largest absolute residual accepted as converged.
    #[serde(default = "default_residual_tolerance")]
    pub residual_tolerance: f64,

    /// Iteration cap.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// First secant seed.
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Second secant seed.
    #[serde(default = "default_second_guess")]
    pub second_guess: f64,
}

fn default_residual_tolerance() -> f64 {
    DEFAULT_RESIDUAL_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESSES.0
}

fn default_second_guess() -> f64 {
    DEFAULT_INITIAL_GUESSES.1
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            residual_tolerance: default_residual_tolerance(),
            max_iterations: default_max_iterations(),
            initial_guess: default_initial_guess(),
            second_guess: default_second_guess(),
        }
    }
}

impl SolverSettings {
    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets both secant seeds.
    #[must_use]
    pub fn with_guesses(mut self, initial_guess: f64, second_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self.second_guess = second_guess;
        self
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.residual_tolerance.is_finite() || self.residual_tolerance < 0.0 {
            errors.push(ValidationError::with_rule(
                "solver.residual_tolerance",
                format!(
                    "must be a finite, non-negative number (got {})",
                    self.residual_tolerance
                ),
                "non_negative",
            ));
        }

        if self.max_iterations == 0 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "must be at least 1",
                "min_iterations",
            ));
        }

        if !self.initial_guess.is_finite() {
            errors.push(ValidationError::new(
                "solver.initial_guess",
                "must be finite",
            ));
        }

        if !self.second_guess.is_finite() {
            errors.push(ValidationError::new("solver.second_guess", "must be finite"));
        }

        #[allow(clippy::float_cmp)]
        if self.initial_guess == self.second_guess {
            errors.push(ValidationError::with_rule(
                "solver.second_guess",
                "must differ from solver.initial_guess",
                "distinct_seeds",
            ));
        }

        errors
    }
}

/// Defaults applied to every solve unless overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingDefaults {
    /// Days per year for the spread model.
    #[serde(default)]
    pub year_convention: YearConvention,

    /// Whether the target price is dirty or clean.
    #[serde(default)]
    pub price_basis: PriceBasis,
}

impl Validate for PricingDefaults {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let accrued = self.price_basis.accrued_interest();
        if !accrued.is_finite() {
            errors.push(ValidationError::new(
                "pricing.price_basis.accrued_interest",
                format!("must be finite (got {accrued})"),
            ));
        }

        errors
    }
}

impl Validate for BacksolveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.solver.validate();
        errors.extend(self.pricing.validate());
        errors
    }
}

impl BacksolveConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Loads and validates a configuration file.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        config.validate_or_error()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Builds pricing parameters for a target price from these defaults.
    #[must_use]
    pub fn pricing_parameters(&self, target_price: f64) -> PricingParameters {
        PricingParameters::new(target_price)
            .with_residual_tolerance(self.solver.residual_tolerance)
            .with_max_iterations(self.solver.max_iterations)
            .with_initial_guesses(self.solver.initial_guess, self.solver.second_guess)
            .with_year_convention(self.pricing.year_convention)
            .with_price_basis(self.pricing.price_basis)
    }
}
