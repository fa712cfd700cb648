//! Monte Carlo pricing kernel for arithmetic-average Asian call options.
//!
//! The kernel simulates Geometric Brownian Motion (GBM) price paths and
//! aggregates path-dependent payoffs into a discounted price estimate.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── ModelParameters   (spot, drift, volatility, maturity, strike)
//! ├── SimulationConfig  (path count, step count, seed)
//! ├── PathRng           (seeded random number generation)
//! └── Orchestration
//!     ├── simulate_path()   one GBM trajectory per trial
//!     ├── path averaging    arithmetic mean over all n_steps + 1 points
//!     └── aggregation       discounted mean payoff + standard error
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_mc::{ModelParameters, MonteCarloPricer, SimulationConfig};
//!
//! let params = ModelParameters::new(100.0, 0.05, 0.2, 1.0, 100.0);
//! let config = SimulationConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(252)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config).unwrap();
//! let result = pricer.price(&params).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```
//!
//! # Reproducibility
//!
//! All randomness flows through an explicitly seeded [`PathRng`]; two runs
//! with the same seed, parameters and configuration produce bit-identical
//! paths and therefore bit-identical estimates.

pub mod error;
pub mod params;
pub mod pricer;
pub mod rng;
pub mod simulate;

// Re-exports for convenient access
pub use error::PricingError;
pub use params::{ModelParameters, SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use pricer::{MonteCarloPricer, PricingResult};
pub use rng::PathRng;
pub use simulate::simulate_path;
