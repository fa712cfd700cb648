//! asianmc - Monte Carlo pricing of arithmetic-average Asian call options.
//!
//! # Commands
//!
//! - `asianmc price` - Estimate the option price and print it
//! - `asianmc plot` - Price, then render sample paths and the payoff
//!   distribution as HTML charts in a results directory
//!
//! Every model and simulation parameter is settable as a flag; a TOML
//! scenario file can supply values that flags do not override.

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod scenario;

pub use error::{CliError, Result};

/// Asian option Monte Carlo pricer CLI
#[derive(Parser)]
#[command(name = "asianmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Model and simulation parameters, all optional on the command line.
///
/// Precedence: flag, then scenario file, then the built-in default.
#[derive(Args, Clone, Copy, Debug, Default)]
struct ScenarioArgs {
    /// Initial spot price S0
    #[arg(long)]
    spot: Option<f64>,

    /// Annualised drift rate mu
    #[arg(long)]
    drift: Option<f64>,

    /// Annualised volatility sigma
    #[arg(long)]
    volatility: Option<f64>,

    /// Time to maturity T in years
    #[arg(long)]
    maturity: Option<f64>,

    /// Strike price K
    #[arg(long)]
    strike: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(long)]
    paths: Option<usize>,

    /// Number of time steps per path
    #[arg(long)]
    steps: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the option price
    Price {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Estimate the price and render charts
    Plot {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Directory for rendered charts (created if absent)
        #[arg(short, long, default_value = "results")]
        output_dir: String,

        /// Number of freshly simulated example paths to chart
        #[arg(long, default_value = "5")]
        sample_paths: usize,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { scenario } => {
            let (params, config) = scenario::resolve(&scenario.into(), cli.config.as_deref())?;
            commands::price::run(&params, config)
        }
        Commands::Plot {
            scenario,
            output_dir,
            sample_paths,
        } => {
            let (params, config) = scenario::resolve(&scenario.into(), cli.config.as_deref())?;
            commands::plot::run(&params, config, &output_dir, sample_paths)
        }
    }
}

impl From<ScenarioArgs> for scenario::ScenarioOverrides {
    fn from(args: ScenarioArgs) -> Self {
        Self {
            spot: args.spot,
            drift: args.drift,
            volatility: args.volatility,
            maturity: args.maturity,
            strike: args.strike,
            paths: args.paths,
            steps: args.steps,
            seed: args.seed,
        }
    }
}
