//! GBM path simulation.
//!
//! A path is one trajectory of the underlying over discrete time steps,
//! produced with the exact-solution (log-Euler) discretisation:
//!
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! The exact scheme is unbiased at any step size, so the step count only
//! controls the granularity of path averaging, not discretisation bias.
//! This is not the Euler-Maruyama approximation.

use crate::rng::PathRng;

/// Simulates a single GBM price path.
///
/// Returns a freshly allocated path of `n_steps + 1` prices with
/// `path[0] == spot`. Consumes exactly one standard normal draw from `rng`
/// per step, in step order.
///
/// # Arguments
///
/// * `rng` - Seeded random source; drives all stochasticity
/// * `spot` - Initial price (must be > 0)
/// * `drift` - Drift rate, annualised
/// * `volatility` - Volatility, annualised (must be >= 0)
/// * `dt` - Time step size in years (must be > 0)
/// * `n_steps` - Number of steps (must be >= 1)
///
/// # Contract
///
/// Inputs are not validated here; callers validate through
/// [`ModelParameters`](crate::params::ModelParameters) before simulating.
/// Behaviour for non-positive `spot` or `dt` is outside the contract.
pub fn simulate_path(
    rng: &mut PathRng,
    spot: f64,
    drift: f64,
    volatility: f64,
    dt: f64,
    n_steps: usize,
) -> Vec<f64> {
    // Hoisted constants: per-step drift and diffusion scale.
    let drift_dt = (drift - 0.5 * volatility * volatility) * dt;
    let vol_sqrt_dt = volatility * dt.sqrt();

    let mut path = Vec::with_capacity(n_steps + 1);
    path.push(spot);

    let mut price = spot;
    for _ in 0..n_steps {
        let z = rng.gen_normal();
        price *= (drift_dt + vol_sqrt_dt * z).exp();
        path.push(price);
    }

    path
}
