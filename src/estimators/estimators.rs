use log::debug;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

use super::error::{EstimatorError, Result};
use super::hyperparams::{PolynomialRegressionParams, PolynomialRegressionValidParams};
use super::traits::Fit;

use crate::datafits::Quadratic;
use crate::datasets::Dataset;
use crate::hypothesis::{function_string, hypothesis, sample_curve};
use crate::sgd::initialize_coefficients;
use crate::solver::{SGDSolver, Solver};
use crate::Float;

/// The polynomial regression estimator
///
/// A fitted polynomial model along with its training history: the
/// coefficients, the root-mean-square error measured after every epoch, and
/// the hyperparameters the model was trained with. It is read-only once
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegression<F> {
    coefficients: Array1<F>,
    errors: Array1<F>,
    learning_rate: F,
    degree: usize,
    n_iterations: usize,
}

impl<F: Float> PolynomialRegression<F> {
    /// This method instantiates a polynomial regression estimator with default
    /// parameters for the stochastic gradient descent solver.
    pub fn params() -> PolynomialRegressionParams<F> {
        PolynomialRegressionParams::new()
    }

    /// This method is a getter for the coefficients vector. Index `j` holds
    /// the coefficient of `x^j`.
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    /// This method is a getter for the error trace. Index `i` holds the
    /// root-mean-square error after epoch `i`.
    pub fn errors(&self) -> ArrayView1<F> {
        self.errors.view()
    }

    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Short label identifying the training configuration, e.g. `D=5 a=0.1`.
    pub fn name(&self) -> String {
        format!("D={} a={}", self.degree, self.learning_rate)
    }

    pub fn function_string(&self) -> String {
        function_string(self.coefficients.view())
    }

    /// This method evaluates the fitted polynomial at `x`.
    pub fn predict(&self, x: F) -> F {
        hypothesis(x, self.coefficients.view())
    }

    /// This method samples the fitted polynomial on `n` evenly spaced
    /// abscissas of `[0, 1)`.
    pub fn curve(&self, n: usize) -> Dataset<F> {
        sample_curve(self.coefficients.view(), n)
    }
}

/// This implements the stochastic gradient descent optimization procedure
/// with random initial coefficients.
impl<F, R> Fit<F, R, EstimatorError> for PolynomialRegressionValidParams<F>
where
    F: 'static + Float,
    R: Rng + ?Sized,
{
    /// If successful, the output of the solver is an instance of
    /// [`PolynomialRegression`] containing the fitted coefficients.
    type Object = PolynomialRegression<F>;

    /// This method fits a [`PolynomialRegression`] instance to a dataset.
    fn fit(&self, dataset: &Dataset<F>, rng: &mut R) -> Result<Self::Object> {
        if dataset.is_empty() {
            return Err(EstimatorError::EmptyDataset);
        }

        let init = initialize_coefficients(self.degree(), rng);
        debug!(
            "fitting degree {} with learning rate {} over {} samples, initial coefficients {}",
            self.degree(),
            self.learning_rate(),
            dataset.n_samples(),
            init
        );

        let solver = Solver::new()
            .learning_rate(self.learning_rate())
            .n_iterations(self.n_iterations())
            .verbose(self.verbose());
        let (coefficients, errors) = solver.solve(dataset, &Quadratic::new(), init)?;

        Ok(PolynomialRegression {
            coefficients,
            errors,
            learning_rate: self.learning_rate(),
            degree: self.degree(),
            n_iterations: self.n_iterations(),
        })
    }
}
