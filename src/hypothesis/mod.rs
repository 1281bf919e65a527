use ndarray::ArrayView1;

use crate::datasets::{unit_grid, Dataset, Point};
use crate::Float;


/// This function evaluates the polynomial hypothesis
/// ```ignore
/// h(x) = sum_j coefficients[j] * x^j
/// ```
/// The powers are computed exactly with `powf` rather than accumulated by
/// repeated multiplication, so that every coefficient sees the same `x^j`
/// as the one used in the descent updates.
pub fn hypothesis<F: Float>(x: F, coefficients: ArrayView1<F>) -> F {
    coefficients
        .iter()
        .enumerate()
        .fold(F::zero(), |acc, (j, &theta_j)| acc + theta_j * power(x, j))
}

/// `x^j` with a floating exponent.
pub(crate) fn power<F: Float>(x: F, j: usize) -> F {
    x.powf(F::cast(j))
}

/// This function samples the fitted curve on the grid `x_i = i / n`. It is
/// used to plot the hypothesis against the training data.
pub fn sample_curve<F: Float>(coefficients: ArrayView1<F>, n: usize) -> Dataset<F> {
    unit_grid::<F>(n)
        .iter()
        .map(|&x| Point::new(x, hypothesis(x, coefficients)))
        .collect()
}

/// This function renders the hypothesis as a human-readable formula, e.g.
/// `y = 0.500000 * x ^ 0 + -1.250000 * x ^ 1`.
pub fn function_string<F: Float>(coefficients: ArrayView1<F>) -> String {
    let terms = coefficients
        .iter()
        .enumerate()
        .map(|(j, theta_j)| format!("{:.6} * x ^ {}", theta_j, j))
        .collect::<Vec<String>>();
    format!("y = {}", terms.join(" + "))
}
