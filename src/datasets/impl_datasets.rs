use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{Dataset, Point};
use crate::Float;

/// Half-width of the noise added to the synthetic ordinates.
const NOISE_AMPLITUDE: f64 = 0.3;

/// This function builds the uniform grid `x_i = i / n` for `i` in `[0, n)`.
/// It is shared by the dataset generator and the curve sampler, so that a
/// fitted curve is evaluated at the abscissas of the training data.
pub fn unit_grid<F: Float>(n: usize) -> Array1<F> {
    let step = F::one() / F::cast(n);
    Array1::from_iter((0..n).map(|i| step * F::cast(i)))
}

/// This function generates a synthetic dataset of `n` points where
/// `y_i = sin(2 pi x_i) + eps_i`, with `x_i` taken on [`unit_grid`] and the
/// noise `eps_i` drawn uniformly in `[-0.3, 0.3)`.
///
/// The random source is owned by the caller: seeding it makes the dataset
/// reproducible. `n = 0` yields an empty dataset.
pub fn generate_sine_dataset<F: Float, R: Rng + ?Sized>(n: usize, rng: &mut R) -> Dataset<F> {
    let amplitude = F::cast(NOISE_AMPLITUDE);
    let noise = Uniform::new(-amplitude, amplitude);
    let two_pi = F::cast(2. * std::f64::consts::PI);

    unit_grid::<F>(n)
        .iter()
        .map(|&x| {
            let eps = noise.sample(rng);
            Point::new(x, (two_pi * x).sin() + eps)
        })
        .collect()
}
