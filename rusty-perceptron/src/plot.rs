use std::path::Path;

use plotters::{
    prelude::{BitMapBackend, ChartBuilder, Circle, IntoDrawingArea, LabelAreaPosition},
    series::LineSeries,
    style::{Color, BLUE, GREEN, RED, WHITE},
};

use crate::{
    dataset::LabeledExample, error::PerceptronError, fit::TrainingHistory, linear::Label,
};

type Point = (f64, f64);

fn plot_error<E: std::fmt::Display>(err: E) -> PerceptronError {
    PerceptronError::Plot(err.to_string())
}

/// Endpoints of the line `w0 * x + w1 * y = 0` clipped to the square
/// `[low, high] x [low, high]`.
///
/// Returns `None` for an all-zero weight vector, or when the line misses the square.
pub fn decision_boundary(weights: &[f64], low: f64, high: f64) -> Option<(Point, Point)> {
    let (w0, w1) = match weights {
        [w0, w1] => (*w0, *w1),
        _ => return None,
    };
    // The boundary runs along the normal of the weights
    let direction = (w1, -w0);
    if direction == (0.0, 0.0) {
        return None;
    }

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    for d in [direction.0, direction.1] {
        if d == 0.0 {
            if low > 0.0 || high < 0.0 {
                return None;
            }
            continue;
        }
        let (a, b) = (low / d, high / d);
        t_min = t_min.max(a.min(b));
        t_max = t_max.min(a.max(b));
    }
    if t_min > t_max {
        return None;
    }

    Some((
        (t_min * direction.0, t_min * direction.1),
        (t_max * direction.0, t_max * direction.1),
    ))
}

/// Scatter the 2-D `examples` coloured by `predictions` and overlay the
/// boundary learned in `weights`.
pub fn plot_decision_boundary(
    path: &Path,
    examples: &[LabeledExample],
    predictions: &[Label],
    weights: &[f64],
    low: f64,
    high: f64,
) -> Result<(), PerceptronError> {
    if weights.len() != 2 {
        return Err(PerceptronError::InvalidInput(format!(
            "can only plot 2 features, got {}",
            weights.len()
        )));
    }
    if let Some(index) = examples.iter().position(|e| e.features.len() != 2) {
        return Err(PerceptronError::InvalidInput(format!(
            "can only plot 2 features, example {} has {}",
            index,
            examples[index].features.len()
        )));
    }
    if examples.len() != predictions.len() {
        return Err(PerceptronError::InvalidInput(format!(
            "{} examples but {} predictions",
            examples.len(),
            predictions.len()
        )));
    }

    let root_area = BitMapBackend::new(path, (1024, 1024)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Perceptron decision boundary", ("sans-serif", 40))
        .build_cartesian_2d(low..high, low..high)
        .map_err(plot_error)?;

    ctx.configure_mesh().draw().map_err(plot_error)?;

    ctx.draw_series(
        examples
            .iter()
            .zip(predictions)
            .map(|(example, predicted)| {
                let color = match predicted {
                    Label::Positive => BLUE,
                    Label::Negative => GREEN,
                };
                Circle::new(
                    (example.features[0], example.features[1]),
                    3,
                    color.filled(),
                )
            }),
    )
    .map_err(plot_error)?;

    if let Some((start, end)) = decision_boundary(weights, low, high) {
        ctx.draw_series(LineSeries::new(vec![start, end], &RED))
            .map_err(plot_error)?;
    }

    root_area.present().map_err(plot_error)
}

/// Cumulative mistake count over the training pass.
pub fn plot_mistakes(path: &Path, history: &TrainingHistory) -> Result<(), PerceptronError> {
    if history.num_examples == 0 {
        return Err(PerceptronError::EmptyDataset);
    }

    let points = history.cumulative_mistakes();
    let max_mistakes = history.mistakes.len();
    let root_area = BitMapBackend::new(path, (1920, 1080)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error)?;

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Mistakes", ("sans-serif", 40))
        .build_cartesian_2d(0..history.num_examples, 0..(max_mistakes + 1))
        .map_err(plot_error)?;

    ctx.configure_mesh().draw().map_err(plot_error)?;

    ctx.draw_series(LineSeries::new(points, &GREEN))
        .map_err(plot_error)?;

    root_area.present().map_err(plot_error)
}
