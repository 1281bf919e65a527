use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;

use crate::datasets::generate_sine_dataset;
use crate::estimators::error::EstimatorError;
use crate::estimators::estimators::PolynomialRegression;
use crate::estimators::param_guard::ParamGuard;
use crate::estimators::traits::Fit;
use crate::export::{write_pretty, ExportError, PointsExport, SgdExport};


/// File the noisy training points are exported to.
pub const POINTS_FILE: &str = "sin-points-with-noise.json";

/// File the trained models are exported to.
pub const RESULTS_FILE: &str = "stochastic-gradient-descent.results.json";

/// Error variants raised while running an experiment
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("cannot read config '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A single training configuration of a parameter sweep.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    pub learning_rate: f64,
    pub degree: usize,
}

/// Settings of a full experiment: dataset generation, one training per entry
/// of `runs`, and the export of everything to `output_dir`.
///
/// Every field is optional in the JSON representation and falls back to its
/// default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    pub seed: u64,
    pub n_points: usize,
    pub n_iterations: usize,
    pub output_dir: PathBuf,
    pub verbose: bool,
    pub runs: Vec<RunConfig>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            seed: 28051998,
            n_points: 100,
            n_iterations: 5000,
            output_dir: PathBuf::from("exercise.01.notebook"),
            verbose: true,
            runs: vec![RunConfig {
                learning_rate: 0.1,
                degree: 5,
            }],
        }
    }
}

impl ExperimentConfig {
    /// This method reads a JSON config file. Missing fields keep their
    /// default value.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExperimentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ExperimentError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ExperimentError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// This function runs an experiment end to end. A single generator seeded
/// with `config.seed` drives the dataset noise and then the initial
/// coefficients of every run, in order, so the whole experiment is
/// reproducible.
///
/// Every configuration is validated before anything is trained or written.
pub fn run(config: &ExperimentConfig) -> Result<Vec<SgdExport<f64>>, ExperimentError> {
    let params = config
        .runs
        .iter()
        .map(|run| {
            PolynomialRegression::<f64>::params()
                .learning_rate(run.learning_rate)
                .degree(run.degree)
                .n_iterations(config.n_iterations)
                .verbose(config.verbose)
        })
        .collect::<Vec<_>>();
    for p in params.iter() {
        p.check_ref()?;
    }
    if config.n_points == 0 {
        return Err(EstimatorError::EmptyDataset.into());
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let dataset = generate_sine_dataset::<f64, _>(config.n_points, &mut rng);
    info!("generated {} noisy points", dataset.n_samples());
    write_pretty(&PointsExport::from(&dataset), &config.output_dir, POINTS_FILE)?;

    let mut results = Vec::with_capacity(params.len());
    for p in params.iter() {
        let model = p
            .fit(&dataset, &mut rng)
            .map_err(ExperimentError::Estimator)?;
        info!(
            "{} :: final rms {:?}",
            model.name(),
            model.errors().iter().last()
        );
        results.push(SgdExport::new(&model, &dataset));
    }

    write_pretty(&results, &config.output_dir, RESULTS_FILE)?;
    Ok(results)
}
