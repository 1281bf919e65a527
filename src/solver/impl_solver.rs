use ndarray::Array1;

use super::{SGDSolver, Solver};

use crate::datafits::Datafit;
use crate::datasets::Dataset;
use crate::estimators::error::{EstimatorError, Result};
use crate::sgd::stochastic_gradient_descent;
use crate::Float;

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Solver {
            learning_rate: F::cast(0.1),
            n_iterations: 5000,
            verbose: false,
        }
    }
}

impl<F: Float> Solver<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.n_iterations = n_iterations;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl<F, DF> SGDSolver<F, DF> for Solver<F>
where
    F: 'static + Float,
    DF: Datafit<F>,
{
    fn solve(
        &self,
        dataset: &Dataset<F>,
        datafit: &DF,
        coefficients: Array1<F>,
    ) -> Result<(Array1<F>, Array1<F>)> {
        if !(self.learning_rate.is_finite() && self.learning_rate > F::zero()) {
            return Err(EstimatorError::InvalidLearningRate(
                self.learning_rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        if dataset.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }
        if coefficients.is_empty() {
            return Err(EstimatorError::EmptyCoefficients);
        }

        let mut w = coefficients;
        let errors = stochastic_gradient_descent(
            dataset,
            datafit,
            &mut w,
            self.learning_rate,
            self.n_iterations,
            self.verbose,
        );

        Ok((w, errors))
    }
}
