use ndarray::ArrayView1;

use crate::datasets::{Dataset, Point};
use crate::hypothesis::hypothesis;
use crate::Float;

#[cfg(test)]
mod tests;

/// This trait provides the quantities needed by the stochastic gradient
/// descent routine: the value of the objective over a full dataset, the
/// derived root-mean-square error and the per-sample residual used in the
/// coefficient updates.
pub trait Datafit<F: Float> {
    /// This method is called when evaluating the objective value over the
    /// whole dataset.
    fn value(&self, dataset: &Dataset<F>, coefficients: ArrayView1<F>) -> F;

    /// This method computes the residual `y - h(x)` of a single sample. Its
    /// product with `x^j` is the descent direction for coefficient `j`.
    fn residual(&self, point: &Point<F>, coefficients: ArrayView1<F>) -> F;

    /// This method computes the root-mean-square error `sqrt(2 E / n)` from
    /// [`Datafit::value`]. It is a normalized measure of fit quality, so
    /// errors of datasets of different sizes are comparable.
    fn rms(&self, dataset: &Dataset<F>, coefficients: ArrayView1<F>) -> F {
        let n_samples = F::cast(dataset.n_samples());
        (F::cast(2.) * self.value(dataset, coefficients) / n_samples).sqrt()
    }
}

/// Quadratic datafit
///
/// The halved sum of squared residuals
/// ```ignore
/// E(theta) = 1 / 2 * sum_i (h(x_i) - y_i)^2
/// ```
/// Contrary to the usual least-squares datafit, it is not normalized by the
/// number of samples: normalization happens in [`Datafit::rms`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quadratic;

impl Quadratic {
    pub fn new() -> Self {
        Quadratic
    }
}

impl<F: Float> Datafit<F> for Quadratic {
    fn value(&self, dataset: &Dataset<F>, coefficients: ArrayView1<F>) -> F {
        let sse = dataset
            .points()
            .iter()
            .fold(F::zero(), |acc, point| {
                acc + (hypothesis(point.x, coefficients) - point.y).powi(2)
            });
        sse * F::cast(0.5)
    }

    fn residual(&self, point: &Point<F>, coefficients: ArrayView1<F>) -> F {
        point.y - hypothesis(point.x, coefficients)
    }
}
