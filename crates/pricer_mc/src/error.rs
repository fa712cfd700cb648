//! Error types for the Monte Carlo pricing kernel.
//!
//! All validation happens before any simulation begins; once a run is
//! underway there is nothing left to fail. Numeric degeneracy (NaN or
//! infinity produced by pathological but formally valid inputs) is not
//! caught here and propagates to the caller through the returned floats.

use thiserror::Error;

/// Validation error raised before a simulation starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Path count outside the valid range [1, 10_000_000].
    #[error("invalid path count {0}: must be in range [1, 10000000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range [1, 10_000].
    #[error("invalid step count {0}: must be in range [1, 10000]")]
    InvalidStepCount(usize),

    /// A model parameter failed its range or finiteness check.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
