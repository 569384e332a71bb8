#![deny(warnings)]

use std::error::Error;

use log::info;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use rusty_perceptron::{
    config::ExperimentConfig,
    dataset::Dataset,
    fit::{train_with_history, TrainingHistory},
    metrics::{accuracy, predict},
    plot::{plot_decision_boundary, plot_mistakes},
};

struct RunSummary {
    weights: Vec<f64>,
    accuracy: f64,
    history: TrainingHistory,
}

// An empty pass has no mistake curve to draw
fn should_plot_mistakes(config: &ExperimentConfig, history: &TrainingHistory) -> bool {
    config.should_plot && history.num_examples > 0
}

fn separable_plane_example(config: &ExperimentConfig) -> Result<RunSummary, Box<dyn Error>> {
    let dataset = match config.seed {
        Some(seed) => Dataset::generate(&config.dataset, &mut StdRng::seed_from_u64(seed))?,
        None => Dataset::generate(&config.dataset, &mut thread_rng())?,
    };

    let initial = vec![0.0; config.dataset.num_features];
    let (weights, history) = train_with_history(initial, &dataset.train);
    info!(
        "trained on {} examples, {} mistakes, weights: {:?}",
        history.num_examples,
        history.mistakes.len(),
        weights
    );

    let test_accuracy = accuracy(&weights, &dataset.test)?;
    info!("test accuracy: {}", test_accuracy);

    if config.should_plot {
        let predictions = predict(&weights, &dataset.test);
        plot_decision_boundary(
            &config.scatter_path,
            &dataset.test,
            &predictions,
            &weights,
            config.dataset.low,
            config.dataset.high,
        )?;
        info!("wrote {}", config.scatter_path.display());
    }
    if should_plot_mistakes(config, &history) {
        plot_mistakes(&config.mistakes_path, &history)?;
        info!("wrote {}", config.mistakes_path.display());
    }

    Ok(RunSummary {
        weights,
        accuracy: test_accuracy,
        history,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ExperimentConfig::from_env()?;
    let summary = separable_plane_example(&config)?;
    println!(
        "weights: {:?}, mistakes: {}/{}",
        summary.weights,
        summary.history.mistakes.len(),
        summary.history.num_examples
    );
    println!("accuracy: {}", summary.accuracy);
    Ok(())
}
