use core::fmt;
use std::error;

#[derive(Debug, PartialEq)]
pub enum PerceptronError {
    InvalidInput(String),
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    EmptyDataset,
    Plot(String),
}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PerceptronError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            PerceptronError::DimensionMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Example {} has {} features, weights have {}",
                index, found, expected
            ),
            PerceptronError::EmptyDataset => write!(f, "Dataset is empty"),
            PerceptronError::Plot(reason) => write!(f, "Plotting failed: {}", reason),
        }
    }
}

impl error::Error for PerceptronError {}
