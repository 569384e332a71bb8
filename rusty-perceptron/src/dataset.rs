use log::debug;
use rand::{distributions::Uniform, Rng};

use crate::{
    error::PerceptronError,
    linear::{classify, Label},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    pub features: Vec<f64>,
    pub label: Label,
}

impl LabeledExample {
    pub fn new(features: Vec<f64>, label: Label) -> Self {
        Self { features, label }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub num_features: usize,
    pub num_train: usize,
    pub num_test: usize,
    /// Inclusive lower bound for true weights and features
    pub low: f64,
    /// Exclusive upper bound for true weights and features
    pub high: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            num_features: 2,
            num_train: 1_000_000,
            num_test: 1_000,
            low: -10.0,
            high: 10.0,
        }
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<(), PerceptronError> {
        if self.num_features == 0 {
            return Err(PerceptronError::InvalidInput(
                "number of features must be positive".to_string(),
            ));
        }
        // Uniform also needs the width of the range to be finite
        if !(self.high - self.low).is_finite() || self.low >= self.high {
            return Err(PerceptronError::InvalidInput(format!(
                "sampling range [{}, {}) is empty or not finite",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Linearly separable (through the origin) synthetic data.
///
/// `true_weights` only labels the examples. The trainer never sees it.
pub struct Dataset {
    pub true_weights: Vec<f64>,
    pub train: Vec<LabeledExample>,
    pub test: Vec<LabeledExample>,
}

impl Dataset {
    pub fn generate<R: Rng>(config: &DatasetConfig, rng: &mut R) -> Result<Self, PerceptronError> {
        config.validate()?;
        let uniform = Uniform::new(config.low, config.high);

        let true_weights = sample_vector(rng, uniform, config.num_features);
        debug!("true weights: {:?}", true_weights);

        let mut sample_examples = |count: usize| {
            let mut examples = Vec::with_capacity(count);
            for _ in 0..count {
                let features = sample_vector(rng, uniform, config.num_features);
                examples.push(Self::label_with(&true_weights, features));
            }
            examples
        };
        let train = sample_examples(config.num_train);
        let test = sample_examples(config.num_test);

        debug!(
            "generated {} training and {} test examples with {} features",
            train.len(),
            test.len(),
            config.num_features
        );
        Ok(Self {
            true_weights,
            train,
            test,
        })
    }

    pub fn label_with(true_weights: &[f64], features: Vec<f64>) -> LabeledExample {
        let label = classify(&features, true_weights);
        LabeledExample::new(features, label)
    }
}

fn sample_vector<R: Rng>(rng: &mut R, uniform: Uniform<f64>, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample(uniform)).collect()
}
