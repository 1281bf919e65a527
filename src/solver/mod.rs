use ndarray::Array1;

use crate::datafits::Datafit;
use crate::datasets::Dataset;
use crate::estimators::error::Result;
use crate::Float;

mod impl_solver;


/// Stochastic gradient descent solver
///
/// The solver stores the optimization settings. It is the lower-level API:
/// the caller provides the datafit and the initial coefficients, so no
/// randomness is involved once the solver runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Solver<F> {
    pub learning_rate: F,
    pub n_iterations: usize,
    pub verbose: bool,
}

/// This trait solves a polynomial regression problem starting from a given
/// coefficient vector. It returns the fitted coefficients and the error trace.
pub trait SGDSolver<F, DF>
where
    F: Float,
    DF: Datafit<F>,
{
    fn solve(
        &self,
        dataset: &Dataset<F>,
        datafit: &DF,
        coefficients: Array1<F>,
    ) -> Result<(Array1<F>, Array1<F>)>;
}
