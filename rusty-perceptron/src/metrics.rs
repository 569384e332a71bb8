use crate::{
    dataset::LabeledExample,
    error::PerceptronError,
    linear::{classify, Label},
};

pub fn predict(weights: &[f64], examples: &[LabeledExample]) -> Vec<Label> {
    examples
        .iter()
        .map(|example| classify(&example.features, weights))
        .collect()
}

/// Fraction of `examples` whose predicted label equals the true label.
pub fn accuracy(weights: &[f64], examples: &[LabeledExample]) -> Result<f64, PerceptronError> {
    if examples.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }

    let correct = predict(weights, examples)
        .iter()
        .zip(examples)
        .filter(|(predicted, example)| **predicted == example.label)
        .count();
    Ok(correct as f64 / examples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples() -> Vec<LabeledExample> {
        vec![
            LabeledExample::new(vec![2.0, 1.0], Label::Positive),
            LabeledExample::new(vec![1.0, 2.0], Label::Negative),
            LabeledExample::new(vec![-3.0, 1.0], Label::Negative),
            LabeledExample::new(vec![4.0, -4.0], Label::Positive),
        ]
    }

    #[test]
    fn test_predict() {
        assert_eq!(
            predict(&[0.0, 1.0], &examples()),
            vec![
                Label::Positive,
                Label::Positive,
                Label::Positive,
                Label::Negative
            ]
        );
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[1.0, -1.0], &examples()), Ok(1.0));
        assert_eq!(accuracy(&[-1.0, 1.0], &examples()), Ok(0.0));
        assert_eq!(accuracy(&[0.0, 1.0], &examples()), Ok(0.25));
    }

    #[test]
    fn test_accuracy_empty() {
        assert_eq!(accuracy(&[1.0, 1.0], &[]), Err(PerceptronError::EmptyDataset));
    }
}
