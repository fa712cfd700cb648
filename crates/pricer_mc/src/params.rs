//! Model parameters and simulation configuration.
//!
//! [`ModelParameters`] describes the GBM dynamics and the option contract;
//! [`SimulationConfig`] describes how many paths and steps to simulate and
//! carries the optional seed. Both are immutable value types passed to
//! every operation; no process-wide state exists anywhere in the kernel.

use crate::error::PricingError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// GBM dynamics and option contract parameters.
///
/// # Model
///
/// The underlying follows Geometric Brownian Motion:
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// The drift `μ` here is a real-world drift, and the same `μ` doubles as
/// the discount rate during aggregation. This is a deliberate modelling
/// simplification rather than strict risk-neutral pricing; see
/// [`MonteCarloPricer::price`](crate::pricer::MonteCarloPricer::price).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParameters {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift rate (μ) - annualised.
    pub drift: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
    /// Strike price (K).
    pub strike: f64,
}

impl ModelParameters {
    /// Creates new model parameters.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64, strike: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
            strike,
        }
    }

    /// Returns the time step size for the given step count.
    ///
    /// This is the single definition of `dt = T / n_steps`; every consumer
    /// derives it from here so duplicate computations match exactly.
    #[inline]
    pub fn time_step(&self, n_steps: usize) -> f64 {
        self.maturity / n_steps as f64
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if:
    /// - `spot`, `maturity` or `strike` is not strictly positive
    /// - `volatility` is negative
    /// - any value is NaN or infinite
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(invalid("spot", "must be positive and finite", self.spot));
        }
        if !self.drift.is_finite() {
            return Err(invalid("drift", "must be finite", self.drift));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(invalid(
                "volatility",
                "must be non-negative and finite",
                self.volatility,
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(invalid(
                "maturity",
                "must be positive and finite",
                self.maturity,
            ));
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(invalid("strike", "must be positive and finite", self.strike));
        }
        Ok(())
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            strike: 100.0,
        }
    }
}

#[inline]
fn invalid(name: &'static str, reason: &str, value: f64) -> PricingError {
    PricingError::InvalidParameter {
        name,
        value: format!("{reason} (got {value})"),
    }
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation dimensions and the
/// optional seed. Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_paths` or `n_steps` is zero or exceeds its
    /// hard cap ([`MAX_PATHS`] / [`MAX_STEPS`]).
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(PricingError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_paths` or `n_steps` is not set or is invalid.
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        let n_paths = self.n_paths.ok_or(PricingError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let n_steps = self.n_steps.ok_or(PricingError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_params_default_valid() {
        let params = ModelParameters::default();
        assert_eq!(params.spot, 100.0);
        assert_eq!(params.strike, 100.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_validation_rejects_bad_values() {
        let valid = ModelParameters::default();

        let cases = [
            ModelParameters { spot: 0.0, ..valid },
            ModelParameters {
                spot: -100.0,
                ..valid
            },
            ModelParameters {
                spot: f64::NAN,
                ..valid
            },
            ModelParameters {
                drift: f64::INFINITY,
                ..valid
            },
            ModelParameters {
                volatility: -0.2,
                ..valid
            },
            ModelParameters {
                maturity: 0.0,
                ..valid
            },
            ModelParameters {
                strike: -1.0,
                ..valid
            },
        ];

        for params in cases {
            assert!(
                matches!(
                    params.validate(),
                    Err(PricingError::InvalidParameter { .. })
                ),
                "expected rejection for {params:?}"
            );
        }
    }

    #[test]
    fn test_time_step_exact_division() {
        let params = ModelParameters::default();
        assert_eq!(params.time_step(252), 1.0 / 252.0);
        assert_eq!(params.time_step(1), 1.0);
    }

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .n_steps(100)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = SimulationConfig::builder().n_paths(0).n_steps(100).build();
        assert!(matches!(result, Err(PricingError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = SimulationConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .n_steps(100)
            .build();
        assert!(matches!(result, Err(PricingError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let result = SimulationConfig::builder().n_paths(1000).n_steps(0).build();
        assert!(matches!(result, Err(PricingError::InvalidStepCount(0))));
    }

    #[test]
    fn test_config_missing_fields() {
        assert!(matches!(
            SimulationConfig::builder().n_steps(100).build(),
            Err(PricingError::InvalidParameter { name: "n_paths", .. })
        ));
        assert!(matches!(
            SimulationConfig::builder().n_paths(1000).build(),
            Err(PricingError::InvalidParameter { name: "n_steps", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_valid_params_accepted(
            spot in 0.01f64..1e6,
            drift in -1.0f64..1.0,
            volatility in 0.0f64..5.0,
            maturity in 0.01f64..50.0,
            strike in 0.01f64..1e6,
        ) {
            let params = ModelParameters::new(spot, drift, volatility, maturity, strike);
            prop_assert!(params.validate().is_ok());
        }
    }
}
