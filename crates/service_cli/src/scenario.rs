//! Scenario resolution: flags over file over defaults.
//!
//! A scenario is the full set of model and simulation parameters for one
//! pricing run. Values come from three layers, highest precedence first:
//! command-line flags, an optional TOML scenario file, and built-in
//! defaults (the classic S0=100, μ=0.05, σ=0.2, T=1, K=100 setup with
//! 10,000 paths of 252 daily steps).

use serde::Deserialize;
use tracing::debug;

use pricer_mc::{ModelParameters, SimulationConfig};

use crate::error::{CliError, Result};

/// Default number of Monte Carlo paths.
const DEFAULT_PATHS: usize = 10_000;

/// Default number of time steps (trading days in a year).
const DEFAULT_STEPS: usize = 252;

/// Parameter overrides collected from command-line flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenarioOverrides {
    pub spot: Option<f64>,
    pub drift: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub strike: Option<f64>,
    pub paths: Option<usize>,
    pub steps: Option<usize>,
    pub seed: Option<u64>,
}

/// Scenario file contents; every field optional.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub spot: Option<f64>,
    pub drift: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub strike: Option<f64>,
    pub paths: Option<usize>,
    pub steps: Option<usize>,
    pub seed: Option<u64>,
}

impl ScenarioFile {
    /// Loads and parses a TOML scenario file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ScenarioRead {
            path: path.to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Resolves flags and the optional scenario file into validated
/// kernel inputs.
///
/// # Errors
///
/// Returns an error if the scenario file cannot be read or parsed, or if
/// the resolved parameters fail kernel validation.
pub fn resolve(
    overrides: &ScenarioOverrides,
    file_path: Option<&str>,
) -> Result<(ModelParameters, SimulationConfig)> {
    let file = match file_path {
        Some(path) => {
            debug!("Loading scenario file {path}");
            ScenarioFile::load(path)?
        }
        None => ScenarioFile::default(),
    };

    merge(overrides, &file)
}

fn merge(
    overrides: &ScenarioOverrides,
    file: &ScenarioFile,
) -> Result<(ModelParameters, SimulationConfig)> {
    let defaults = ModelParameters::default();

    let params = ModelParameters::new(
        overrides.spot.or(file.spot).unwrap_or(defaults.spot),
        overrides.drift.or(file.drift).unwrap_or(defaults.drift),
        overrides
            .volatility
            .or(file.volatility)
            .unwrap_or(defaults.volatility),
        overrides
            .maturity
            .or(file.maturity)
            .unwrap_or(defaults.maturity),
        overrides.strike.or(file.strike).unwrap_or(defaults.strike),
    );
    params.validate()?;

    let mut builder = SimulationConfig::builder()
        .n_paths(overrides.paths.or(file.paths).unwrap_or(DEFAULT_PATHS))
        .n_steps(overrides.steps.or(file.steps).unwrap_or(DEFAULT_STEPS));
    if let Some(seed) = overrides.seed.or(file.seed) {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    Ok((params, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let (params, config) = merge(&ScenarioOverrides::default(), &ScenarioFile::default())
            .unwrap();

        assert_eq!(params, ModelParameters::default());
        assert_eq!(config.n_paths(), DEFAULT_PATHS);
        assert_eq!(config.n_steps(), DEFAULT_STEPS);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_flag_beats_file_beats_default() {
        let overrides = ScenarioOverrides {
            spot: Some(120.0),
            ..Default::default()
        };
        let file = ScenarioFile {
            spot: Some(80.0),
            strike: Some(95.0),
            paths: Some(500),
            ..Default::default()
        };

        let (params, config) = merge(&overrides, &file).unwrap();

        assert_eq!(params.spot, 120.0); // flag wins
        assert_eq!(params.strike, 95.0); // file fills the gap
        assert_eq!(params.drift, 0.05); // default remains
        assert_eq!(config.n_paths(), 500);
    }

    #[test]
    fn test_invalid_resolved_params_rejected() {
        let overrides = ScenarioOverrides {
            volatility: Some(-0.5),
            ..Default::default()
        };

        assert!(matches!(
            merge(&overrides, &ScenarioFile::default()),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_scenario_file_parse() {
        let file: ScenarioFile = toml::from_str(
            r#"
            spot = 105.0
            volatility = 0.25
            paths = 20000
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(file.spot, Some(105.0));
        assert_eq!(file.volatility, Some(0.25));
        assert_eq!(file.paths, Some(20_000));
        assert_eq!(file.seed, Some(7));
        assert_eq!(file.strike, None);
    }

    #[test]
    fn test_scenario_file_rejects_unknown_keys() {
        let result: std::result::Result<ScenarioFile, _> = toml::from_str("rate = 0.05");
        assert!(result.is_err());
    }
}
