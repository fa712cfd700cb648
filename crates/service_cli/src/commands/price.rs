//! Price command implementation
//!
//! Runs the Monte Carlo estimate and reports it on stdout.

use tracing::info;

use pricer_mc::{ModelParameters, MonteCarloPricer, PricingResult, SimulationConfig};

use crate::Result;

/// Run the price command
pub fn run(params: &ModelParameters, config: SimulationConfig) -> Result<()> {
    let result = estimate(params, config)?;
    report(&result);
    Ok(())
}

/// Runs one pricing run and returns the full result.
pub(crate) fn estimate(
    params: &ModelParameters,
    config: SimulationConfig,
) -> Result<PricingResult> {
    info!("Starting Monte Carlo simulation for Asian option pricing...");
    info!("  Spot: {}, Drift: {}, Vol: {}", params.spot, params.drift, params.volatility);
    info!("  Maturity: {}y, Strike: {}", params.maturity, params.strike);
    info!("  Paths: {}, Steps: {}", config.n_paths(), config.n_steps());

    let mut pricer = MonteCarloPricer::new(config)?;
    let result = pricer.price(params)?;

    info!("Pricing complete");
    Ok(result)
}

/// Renders the estimate as fixed-point text, 4 decimal places.
pub(crate) fn report(result: &PricingResult) {
    println!("Estimated Asian Option Price: {:.4}", result.price);
    println!("Standard Error:               {:.4}", result.std_error);
}
