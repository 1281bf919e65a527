use log::{info, warn};
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::Float;
use crate::datafits::Datafit;
use crate::datasets::Dataset;
use crate::helpers::helpers::first_non_finite;
use crate::hypothesis::power;


/// Half-width of the interval the initial coefficients are drawn from.
const INIT_AMPLITUDE: f64 = 0.5;

/// Number of epochs between two progress reports in verbose mode.
const LOG_EVERY: usize = 500;

/// This function draws the `degree + 1` initial coefficients independently
/// and uniformly in `[-0.5, 0.5)`.
pub fn initialize_coefficients<F, R>(degree: usize, rng: &mut R) -> Array1<F>
where
    F: Float,
    R: Rng + ?Sized,
{
    let amplitude = F::cast(INIT_AMPLITUDE);
    let init = Uniform::new(-amplitude, amplitude);
    Array1::from_iter((0..=degree).map(|_| init.sample(rng)))
}

/// This function performs a single pass of stochastic gradient descent over
/// the dataset.
///
/// Points are visited in dataset order, and for each point the coefficients
/// are updated in increasing index order:
/// ```ignore
/// theta_j <- theta_j + learning_rate * (y - h(x, theta)) * x^j
/// ```
/// The residual is recomputed before every coefficient update, hence the
/// update of `theta_j` already sees `theta_0, ..., theta_{j-1}` updated for
/// the current point. This is not a simultaneous gradient step and the
/// sequencing is part of the observable behavior.
pub fn sgd_epoch<F, DF>(
    dataset: &Dataset<F>,
    coefficients: &mut Array1<F>,
    datafit: &DF,
    learning_rate: F,
) where
    F: 'static + Float,
    DF: Datafit<F>,
{
    for point in dataset.points() {
        for j in 0..coefficients.len() {
            let residual = datafit.residual(point, coefficients.view());
            coefficients[j] += learning_rate * residual * power(point.x, j);
        }
    }
}

/// This function runs exactly `n_iterations` epochs of [`sgd_epoch`],
/// updating `coefficients` in place, and returns the error trace: the
/// root-mean-square error over the whole dataset measured after each epoch.
///
/// There is no convergence check. A learning rate or a degree that is too
/// large makes the coefficients diverge; the trace then holds infinite or
/// NaN values, which are reported but not masked.
pub fn stochastic_gradient_descent<F, DF>(
    dataset: &Dataset<F>,
    datafit: &DF,
    coefficients: &mut Array1<F>,
    learning_rate: F,
    n_iterations: usize,
    verbose: bool,
) -> Array1<F>
where
    F: 'static + Float,
    DF: Datafit<F>,
{
    let mut errors = Array1::<F>::zeros(n_iterations);

    for epoch in 0..n_iterations {
        sgd_epoch(dataset, coefficients, datafit, learning_rate);
        errors[epoch] = datafit.rms(dataset, coefficients.view());

        if verbose && (epoch % LOG_EVERY == 0 || epoch + 1 == n_iterations) {
            info!("epoch: {} :: rms: {:#?}", epoch, errors[epoch]);
        }
    }

    report_divergence(errors.view());
    errors
}

fn report_divergence<F: Float>(errors: ArrayView1<F>) {
    if let Some((epoch, err)) = first_non_finite(errors) {
        warn!(
            "training error became non-finite ({}) at epoch {}, \
             consider lowering the learning rate or the degree",
            err,
            epoch
        );
    }
}
