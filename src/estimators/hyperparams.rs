use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a polynomial
/// regression model
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegressionValidParams<F> {
    learning_rate: F,
    degree: usize,
    n_iterations: usize,
    verbose: bool,
}

impl<F: Float> PolynomialRegressionValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures the stochastic gradient descent fit of a polynomial of degree
/// `D` minimizing:
/// ```ignore
/// 1 / 2 * sum_i (h(x_i) - y_i)^2,   h(x) = sum_{j=0}^{D} theta_j * x^j
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegressionParams<F>(PolynomialRegressionValidParams<F>);

impl<F: Float> Default for PolynomialRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a polynomial regression model
impl<F: Float> PolynomialRegressionParams<F> {
    /// Create default polynomial regression hyper parameters
    pub fn new() -> PolynomialRegressionParams<F> {
        Self(PolynomialRegressionValidParams {
            learning_rate: F::cast(0.1),
            degree: 5,
            n_iterations: 5000,
            verbose: false,
        })
    }

    /// Set the step size of the coefficient updates. Must be strictly
    /// positive. Large values combined with a large degree make the
    /// coefficients diverge.
    /// Defaults to `0.1` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the degree of the polynomial. The model has `degree + 1`
    /// coefficients.
    /// Defaults to `5` if not set.
    pub fn degree(mut self, degree: usize) -> Self {
        self.0.degree = degree;
        self
    }

    /// Set the number of full passes over the dataset. Training always runs
    /// exactly this many epochs. Zero epochs returns the random
    /// initialization untouched.
    /// Defaults to `5000` if not set.
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.0.n_iterations = n_iterations;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for PolynomialRegressionParams<F> {
    type Checked = PolynomialRegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let learning_rate = self.0.learning_rate;
        if !learning_rate.is_finite() || learning_rate <= F::zero() {
            Err(EstimatorError::InvalidLearningRate(
                learning_rate.to_f64().unwrap_or(f64::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
