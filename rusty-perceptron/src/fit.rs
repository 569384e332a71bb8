use log::{debug, trace};

use crate::{
    dataset::LabeledExample,
    error::PerceptronError,
    linear::{add_assign, classify, sub_assign, Label},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Unchanged,
    /// False negative, the features were added to the weights
    Added,
    /// False positive, the features were subtracted from the weights
    Subtracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mistake {
    pub index: usize,
    pub update: Update,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingHistory {
    pub num_examples: usize,
    pub mistakes: Vec<Mistake>,
}

impl TrainingHistory {
    /// `(examples seen, mistakes so far)` after every mistake, plus the end of the pass.
    pub fn cumulative_mistakes(&self) -> Vec<(usize, usize)> {
        let mut points = vec![(0, 0)];
        for (count, mistake) in self.mistakes.iter().enumerate() {
            points.push((mistake.index + 1, count + 1));
        }
        points.push((self.num_examples, self.mistakes.len()));
        points
    }
}

/// One mistake-driven update. The weights are only touched when the
/// prediction disagrees with the label.
pub fn step(weights: &mut [f64], example: &LabeledExample) -> Update {
    match (classify(&example.features, weights), example.label) {
        (Label::Positive, Label::Negative) => {
            sub_assign(weights, &example.features);
            Update::Subtracted
        }
        (Label::Negative, Label::Positive) => {
            add_assign(weights, &example.features);
            Update::Added
        }
        _ => Update::Unchanged,
    }
}

/// Runs exactly one ordered pass of the perceptron rule over `examples`.
///
/// Every feature vector must have the same length as `weights`; this is not
/// checked here, use [`try_train`] for untrusted input. There is no
/// convergence check: every example is visited even after the mistakes stop.
pub fn train(weights: Vec<f64>, examples: &[LabeledExample]) -> Vec<f64> {
    train_with_history(weights, examples).0
}

pub fn train_with_history(
    mut weights: Vec<f64>,
    examples: &[LabeledExample],
) -> (Vec<f64>, TrainingHistory) {
    let mut history = TrainingHistory {
        num_examples: examples.len(),
        mistakes: Vec::new(),
    };

    for (index, example) in examples.iter().enumerate() {
        let update = step(&mut weights, example);
        if update != Update::Unchanged {
            trace!("example {}: {:?} -> {:?}", index, update, weights);
            history.mistakes.push(Mistake { index, update });
        }
    }

    debug!(
        "perceptron pass done: {} mistakes over {} examples",
        history.mistakes.len(),
        history.num_examples
    );
    (weights, history)
}

pub fn try_train(
    weights: Vec<f64>,
    examples: &[LabeledExample],
) -> Result<Vec<f64>, PerceptronError> {
    check_dimensions(weights.len(), examples)?;
    Ok(train(weights, examples))
}

pub fn check_dimensions(
    num_features: usize,
    examples: &[LabeledExample],
) -> Result<(), PerceptronError> {
    if num_features == 0 {
        return Err(PerceptronError::InvalidInput(
            "weight vector is empty".to_string(),
        ));
    }
    match examples
        .iter()
        .position(|example| example.features.len() != num_features)
    {
        Some(index) => Err(PerceptronError::DimensionMismatch {
            index,
            expected: num_features,
            found: examples[index].features.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetConfig};
    use crate::linear::dot;
    use crate::metrics::accuracy;
    use rand::{rngs::StdRng, SeedableRng};

    fn example(features: &[f64], label: Label) -> LabeledExample {
        LabeledExample::new(features.to_vec(), label)
    }

    #[test]
    fn test_two_step_scenario() {
        let examples = vec![
            example(&[2.0, 1.0], Label::Positive),
            example(&[1.0, 2.0], Label::Negative),
        ];

        let mut weights = vec![0.0, 0.0];
        assert_eq!(step(&mut weights, &examples[0]), Update::Unchanged);
        assert_eq!(weights, vec![0.0, 0.0]);
        assert_eq!(step(&mut weights, &examples[1]), Update::Subtracted);
        assert_eq!(weights, vec![-1.0, -2.0]);

        assert_eq!(train(vec![0.0, 0.0], &examples), vec![-1.0, -2.0]);
    }

    #[test]
    fn test_empty_training_set_is_noop() {
        let initial = vec![0.5, -3.25, 7.0];
        assert_eq!(train(initial.clone(), &[]), initial);

        let (weights, history) = train_with_history(initial.clone(), &[]);
        assert_eq!(weights, initial);
        assert!(history.mistakes.is_empty());
    }

    #[test]
    fn test_update_is_exactly_plus_or_minus_features() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = DatasetConfig {
            num_features: 4,
            num_train: 500,
            num_test: 0,
            ..DatasetConfig::default()
        };
        let dataset = Dataset::generate(&config, &mut rng).unwrap();

        let mut weights = vec![0.0; 4];
        for example in dataset.train.iter() {
            let before = weights.clone();
            let predicted = Label::from(dot(&example.features, &before) >= 0.0);
            let update = step(&mut weights, example);

            for ((after_i, before_i), x_i) in
                weights.iter().zip(before.iter()).zip(example.features.iter())
            {
                let expected = match update {
                    Update::Unchanged => *before_i,
                    Update::Added => before_i + x_i,
                    Update::Subtracted => before_i - x_i,
                };
                assert_eq!(*after_i, expected);
            }

            let expected_update = match (predicted, example.label) {
                (Label::Positive, Label::Negative) => Update::Subtracted,
                (Label::Negative, Label::Positive) => Update::Added,
                _ => Update::Unchanged,
            };
            assert_eq!(update, expected_update);
        }
    }

    #[test]
    fn test_order_matters() {
        let examples = vec![
            example(&[2.0, 1.0], Label::Negative),
            example(&[1.0, 3.0], Label::Positive),
        ];
        let reversed: Vec<LabeledExample> = examples.iter().rev().cloned().collect();

        // [2,1] first: subtract -> [-2,-1], then [1,3] scores -5 -> add -> [-1,2]
        assert_eq!(train(vec![0.0, 0.0], &examples), vec![-1.0, 2.0]);
        // [1,3] first: scores 0, correct; then [2,1] scores 0 -> subtract -> [-2,-1]
        assert_eq!(train(vec![0.0, 0.0], &reversed), vec![-2.0, -1.0]);
    }

    #[test]
    fn test_already_correct_stream_leaves_weights() {
        let initial = vec![1.0, -1.0];
        let examples: Vec<LabeledExample> = [[3.0, 1.0], [-2.0, 4.0], [0.5, -7.0], [1.0, 1.0]]
            .iter()
            .map(|x| Dataset::label_with(&initial, x.to_vec()))
            .collect();

        let (weights, history) = train_with_history(initial.clone(), &examples);
        assert_eq!(weights, initial);
        assert!(history.mistakes.is_empty());
    }

    #[test]
    fn test_separable_data_converges() {
        let mut rng = StdRng::seed_from_u64(2016);
        let config = DatasetConfig {
            num_train: 50_000,
            num_test: 1_000,
            ..DatasetConfig::default()
        };
        let dataset = Dataset::generate(&config, &mut rng).unwrap();

        let weights = train(vec![0.0; config.num_features], &dataset.train);

        let train_accuracy = accuracy(&weights, &dataset.train).unwrap();
        let test_accuracy = accuracy(&weights, &dataset.test).unwrap();
        assert!(train_accuracy > 0.95, "train accuracy: {}", train_accuracy);
        assert!(test_accuracy > 0.95, "test accuracy: {}", test_accuracy);
    }

    #[test]
    fn test_history_records_mistakes() {
        let examples = vec![
            example(&[2.0, 1.0], Label::Negative),
            example(&[1.0, 3.0], Label::Positive),
            example(&[1.0, 3.0], Label::Positive),
        ];
        let (weights, history) = train_with_history(vec![0.0, 0.0], &examples);

        assert_eq!(weights, vec![-1.0, 2.0]);
        assert_eq!(
            history.mistakes,
            vec![
                Mistake {
                    index: 0,
                    update: Update::Subtracted
                },
                Mistake {
                    index: 1,
                    update: Update::Added
                },
            ]
        );
        assert_eq!(
            history.cumulative_mistakes(),
            vec![(0, 0), (1, 1), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_try_train_rejects_mismatched_dimensions() {
        let examples = vec![
            example(&[1.0, 2.0], Label::Positive),
            example(&[1.0, 2.0, 3.0], Label::Negative),
        ];
        assert_eq!(
            try_train(vec![0.0, 0.0], &examples),
            Err(PerceptronError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            try_train(vec![], &examples),
            Err(PerceptronError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_try_train_matches_train() {
        let examples = vec![
            example(&[2.0, 1.0], Label::Positive),
            example(&[1.0, 2.0], Label::Negative),
        ];
        assert_eq!(try_train(vec![0.0, 0.0], &examples), Ok(vec![-1.0, -2.0]));
    }
}
