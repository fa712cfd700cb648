//! Plot command implementation
//!
//! Prices the option, then renders two artifacts into the output
//! directory: a line chart of freshly simulated example paths and a
//! histogram of the payoff sample. Charts are self-contained HTML
//! documents; nothing reads them back.

use std::fs;
use std::path::Path;

use tracing::info;

use pricer_mc::{simulate_path, ModelParameters, PathRng, SimulationConfig};

use super::{charts, price};
use crate::Result;

/// Histogram bin count for the payoff distribution.
const PAYOFF_BINS: usize = 50;

/// Stream offset so example paths never reuse pricing-run draws.
const SAMPLE_STREAM_OFFSET: u64 = 1 << 32;

/// Run the plot command
pub fn run(
    params: &ModelParameters,
    config: SimulationConfig,
    output_dir: &str,
    n_samples: usize,
) -> Result<()> {
    let n_steps = config.n_steps();
    let base_seed = config.seed().unwrap_or(0);

    let result = price::estimate(params, config)?;
    price::report(&result);

    fs::create_dir_all(output_dir)?;

    // Example paths are re-simulated independently of the pricing run.
    let dt = params.time_step(n_steps);
    let mut rng = PathRng::from_seed(base_seed.wrapping_add(SAMPLE_STREAM_OFFSET));
    let samples: Vec<Vec<f64>> = (0..n_samples)
        .map(|_| {
            simulate_path(
                &mut rng,
                params.spot,
                params.drift,
                params.volatility,
                dt,
                n_steps,
            )
        })
        .collect();

    let paths_file = Path::new(output_dir).join("sample_paths.html");
    fs::write(&paths_file, charts::sample_paths_page(&samples))?;
    info!("Saved sample paths chart to {}", paths_file.display());
    println!("Saved sample paths chart to {}", paths_file.display());

    let histogram_file = Path::new(output_dir).join("payoff_distribution.html");
    fs::write(
        &histogram_file,
        charts::payoff_histogram_page(&result.payoffs, PAYOFF_BINS),
    )?;
    info!("Saved payoff distribution to {}", histogram_file.display());
    println!("Saved payoff distribution to {}", histogram_file.display());

    Ok(())
}
