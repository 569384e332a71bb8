//! Vector routines and the zero-threshold sign rule shared by the trainer,
//! the dataset generator and the scorer.
//!
//! Every function here assumes its slices have the same length. Mismatched
//! lengths are not checked; `zip` stops at the shorter slice.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a_i, b_i)| a_i * b_i).sum()
}

pub fn add_assign(w: &mut [f64], x: &[f64]) {
    for (w_i, x_i) in w.iter_mut().zip(x) {
        *w_i += x_i;
    }
}

pub fn sub_assign(w: &mut [f64], x: &[f64]) {
    for (w_i, x_i) in w.iter_mut().zip(x) {
        *w_i -= x_i;
    }
}

/// A score of exactly zero predicts `Positive`.
pub fn classify(features: &[f64], weights: &[f64]) -> Label {
    Label::from(dot(features, weights) >= 0.0)
}
