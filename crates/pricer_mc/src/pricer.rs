//! Monte Carlo pricing engine for arithmetic-average Asian calls.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Random number generation (via [`PathRng`])
//! 2. Path simulation (via [`simulate_path`])
//! 3. Per-path payoff computation
//! 4. Discounting and aggregation
//!
//! # Averaging convention
//!
//! The path average is the arithmetic mean of all `n_steps + 1` points,
//! including the initial spot. This convention is load-bearing for
//! reproducibility; do not switch to post-start averaging without
//! revisiting every reference value.
//!
//! # Discounting convention
//!
//! Paths are simulated under the real-world drift μ and the estimate is
//! discounted by `exp(-μT)`, with μ standing in for the risk-free rate.
//! This is a modelling simplification, not risk-neutral pricing in the
//! strict sense. It is preserved deliberately; a corrected variant would
//! simulate under a separate risk-free rate r and discount by `exp(-rT)`.

use rayon::prelude::*;

use crate::error::PricingError;
use crate::params::{ModelParameters, SimulationConfig};
use crate::rng::PathRng;
use crate::simulate::simulate_path;

/// Paths per independent RNG stream in the parallel driver.
const PARALLEL_CHUNK: usize = 4096;

/// Result of a Monte Carlo pricing run.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingResult {
    /// Discounted price estimate. Always >= 0 for valid inputs.
    pub price: f64,
    /// Standard error of the discounted estimate.
    pub std_error: f64,
    /// Undiscounted payoff per path, in simulation order.
    /// Length always equals the configured path count.
    pub payoffs: Vec<f64>,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Owns the simulation configuration and the random source. Each call to
/// [`price`](Self::price) runs `n_paths` independent trials sequentially;
/// [`price_parallel`](Self::price_parallel) distributes trials across
/// worker threads with independent seeded streams.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::{ModelParameters, MonteCarloPricer, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
/// let result = pricer.price(&ModelParameters::default()).unwrap();
/// assert!(result.price >= 0.0);
/// ```
pub struct MonteCarloPricer {
    config: SimulationConfig,
    rng: PathRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;

        let rng = PathRng::from_seed(config.seed().unwrap_or(0));
        Ok(Self { config, rng })
    }

    /// Creates a new pricer overriding the config seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, PricingError> {
        config.validate()?;

        let rng = PathRng::from_seed(seed);
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Resets the random source to the configured seed.
    pub fn reset(&mut self) {
        self.rng = PathRng::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Resets the random source with a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = PathRng::from_seed(seed);
    }

    /// Prices the Asian call sequentially.
    ///
    /// For each of `n_paths` trials: simulate one GBM path with
    /// `dt = T / n_steps`, average all `n_steps + 1` points (including the
    /// initial spot), and floor the intrinsic value at zero. The estimate
    /// is the mean payoff discounted by `exp(-μT)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation. NaN or infinity
    /// arising from pathological but valid inputs is not caught.
    pub fn price(&mut self, params: &ModelParameters) -> Result<PricingResult, PricingError> {
        params.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let dt = params.time_step(n_steps);

        let mut payoffs = Vec::with_capacity(n_paths);
        for _ in 0..n_paths {
            let path = simulate_path(
                &mut self.rng,
                params.spot,
                params.drift,
                params.volatility,
                dt,
                n_steps,
            );
            payoffs.push(asian_call_payoff(&path, params.strike));
        }

        Ok(aggregate(params, payoffs))
    }

    /// Prices the Asian call with trials distributed across worker threads.
    ///
    /// Trials are split into fixed chunks, each driven by its own RNG
    /// seeded from the configured seed plus the chunk index. Streams are
    /// statistically independent and the result is deterministic for a
    /// given seed regardless of thread count, but it does not reproduce
    /// the sequential draw order bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    pub fn price_parallel(&self, params: &ModelParameters) -> Result<PricingResult, PricingError> {
        params.validate()?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let dt = params.time_step(n_steps);
        let base_seed = self.config.seed().unwrap_or(0);

        let n_chunks = (n_paths + PARALLEL_CHUNK - 1) / PARALLEL_CHUNK;

        let payoffs: Vec<f64> = (0..n_chunks)
            .into_par_iter()
            .flat_map_iter(|chunk| {
                let start = chunk * PARALLEL_CHUNK;
                let len = PARALLEL_CHUNK.min(n_paths - start);
                // Offset by 1 so chunk 0 does not alias the sequential stream.
                let mut rng = PathRng::from_seed(base_seed.wrapping_add(1 + chunk as u64));

                let mut chunk_payoffs = Vec::with_capacity(len);
                for _ in 0..len {
                    let path = simulate_path(
                        &mut rng,
                        params.spot,
                        params.drift,
                        params.volatility,
                        dt,
                        n_steps,
                    );
                    chunk_payoffs.push(asian_call_payoff(&path, params.strike));
                }
                chunk_payoffs.into_iter()
            })
            .collect();

        Ok(aggregate(params, payoffs))
    }
}

/// Arithmetic-average Asian call payoff over a full path.
///
/// The average runs over every point, initial spot included.
#[inline]
fn asian_call_payoff(path: &[f64], strike: f64) -> f64 {
    let average = path.iter().sum::<f64>() / path.len() as f64;
    (average - strike).max(0.0)
}

/// Discounted mean and standard error over a payoff sample.
fn aggregate(params: &ModelParameters, payoffs: Vec<f64>) -> PricingResult {
    let n = payoffs.len();
    let mean = payoffs.iter().sum::<f64>() / n as f64;

    let std_error = if n > 1 {
        let variance =
            payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        (variance / n as f64).sqrt()
    } else {
        0.0
    };

    // The drift doubles as the discount rate; see the module docs.
    let discount = (-params.drift * params.maturity).exp();

    PricingResult {
        price: mean * discount,
        std_error: std_error * discount,
        payoffs,
    }
}
