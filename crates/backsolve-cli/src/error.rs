//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use backsolve_config::ConfigError;
use backsolve_core::CoreError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Cash flow file extension is not recognized.
    #[error("Unsupported cash flow file {0}. Use a .csv or .json file.")]
    UnsupportedInput(PathBuf),

    /// Cash flow file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Cash flow file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Parsed entries do not form a valid stream.
    #[error("Invalid cash flow stream: {0}")]
    InvalidStream(#[from] CoreError),

    /// Arguments that parse individually but make no sense together.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
