//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// Kernel-side validation failure.
    #[error("pricing error: {0}")]
    Pricing(#[from] pricer_mc::PricingError),

    /// Scenario file could not be read.
    #[error("failed to read scenario file '{path}': {source}")]
    ScenarioRead {
        /// Path to the scenario file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Scenario file could not be parsed.
    #[error("failed to parse scenario file: {0}")]
    ScenarioParse(#[from] toml::de::Error),

    /// Chart output could not be written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
