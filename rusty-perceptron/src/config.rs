use std::{env, path::PathBuf, str::FromStr};

use crate::{dataset::DatasetConfig, error::PerceptronError};

pub const TRAIN_VAR: &str = "PERCEPTRON_TRAIN";
pub const TEST_VAR: &str = "PERCEPTRON_TEST";
pub const FEATURES_VAR: &str = "PERCEPTRON_FEATURES";
pub const SEED_VAR: &str = "PERCEPTRON_SEED";
pub const PLOT_VAR: &str = "PERCEPTRON_PLOT";

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub dataset: DatasetConfig,
    /// Unseeded runs draw from the thread rng
    pub seed: Option<u64>,
    pub should_plot: bool,
    pub scatter_path: PathBuf,
    pub mistakes_path: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            seed: None,
            should_plot: true,
            scatter_path: PathBuf::from("decision_boundary.png"),
            mistakes_path: PathBuf::from("mistakes.png"),
        }
    }
}

impl ExperimentConfig {
    pub fn from_env() -> Result<Self, PerceptronError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PerceptronError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(num_train) = parse_var(&lookup, TRAIN_VAR)? {
            config.dataset.num_train = num_train;
        }
        if let Some(num_test) = parse_var(&lookup, TEST_VAR)? {
            config.dataset.num_test = num_test;
        }
        if let Some(num_features) = parse_var(&lookup, FEATURES_VAR)? {
            config.dataset.num_features = num_features;
        }
        config.seed = parse_var(&lookup, SEED_VAR)?;
        if let Some(should_plot) = parse_var(&lookup, PLOT_VAR)? {
            config.should_plot = should_plot;
        }

        config.dataset.validate()?;
        // Only planar data can be scattered
        if config.dataset.num_features != 2 {
            config.should_plot = false;
        }
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, PerceptronError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            PerceptronError::InvalidInput(format!("could not parse {}={:?}", key, raw))
        }),
    }
}
