//! Backsolve Configuration Layer
//!
//! This crate holds the defaults a solve falls back on when the caller does
//! not set them: solver tolerance and iteration cap, secant starting rates,
//! the spread model's year convention and the price basis.
//!
//! # Example
//!
//! ```rust
//! use backsolve_config::{BacksolveConfig, Validate};
//!
//! let config = BacksolveConfig::from_toml_str(
//!     r#"
//!     [solver]
//!     residual_tolerance = 1e-6
//!     max_iterations = 50
//!
//!     [pricing]
//!     year_convention = 365
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.solver.max_iterations, 50);
//!
//! let params = config.pricing_parameters(101.5);
//! assert_eq!(params.max_iterations, 50);
//! ```
//!
//! # File Formats
//!
//! [`BacksolveConfig::from_path`] picks the parser from the file extension:
//! `.toml` or `.json`. Missing sections and fields take their defaults.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{BacksolveConfig, PricingDefaults, SolverSettings};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::settings::{BacksolveConfig, PricingDefaults, SolverSettings};
}
