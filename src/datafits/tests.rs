use approx::assert_relative_eq;
use ndarray::{array, Array1};
use ndarray_stats::DeviationExt;

use crate::datafits::*;
use crate::datasets::Dataset;
use crate::helpers::test_helpers::*;
use crate::hypothesis::hypothesis;

fn toy_dataset() -> Dataset<f64> {
    Dataset::from_xy(&[0., 0.5, 1.], &[1., 0., 2.]).unwrap()
}

#[test]
fn test_value_quadratic() {
    let dataset = toy_dataset();
    let coefficients = array![1., -1.];
    let df = Quadratic::new();
    assert_eq!(df.value(&dataset, coefficients.view()), 2.125);
}

#[test]
fn test_rms_quadratic() {
    let dataset = toy_dataset();
    let coefficients = array![1., -1.];
    let df = Quadratic::new();
    assert_relative_eq!(
        df.rms(&dataset, coefficients.view()),
        (4.25_f64 / 3.).sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn test_rms_matches_root_mean_squared_residuals() {
    let dataset = generate_random_data(60, 11);
    let coefficients = array![0.2, -0.4, 1.3, -0.8];
    let fitted: Array1<f64> = dataset
        .xs()
        .iter()
        .map(|&x| hypothesis(x, coefficients.view()))
        .collect();
    let expected = fitted.root_mean_sq_err(&dataset.ys()).unwrap();

    let df = Quadratic::new();
    assert_relative_eq!(
        df.rms(&dataset, coefficients.view()),
        expected,
        max_relative = 1e-9
    );
}

#[test]
fn test_residual_quadratic() {
    let dataset = toy_dataset();
    let coefficients = array![1., -1.];
    let df = Quadratic::new();
    let residuals: Vec<f64> = dataset
        .points()
        .iter()
        .map(|p| df.residual(p, coefficients.view()))
        .collect();
    assert_eq!(residuals, vec![0., -0.5, 2.]);
}

#[test]
fn test_errors_are_non_negative() {
    let dataset = generate_random_data(30, 5);
    let df = Quadratic::new();
    for coefficients in [array![0.], array![-3., 10., -7.], array![1e3, -1e3, 1e3, -1e3]] {
        assert!(df.value(&dataset, coefficients.view()) >= 0.);
        assert!(df.rms(&dataset, coefficients.view()) >= 0.);
    }
}

#[test]
fn test_errors_are_pure() {
    let dataset = generate_random_data(30, 9);
    let coefficients = array![0.1, 0.2, -0.3];
    let df = Quadratic::new();
    assert_eq!(
        df.value(&dataset, coefficients.view()).to_bits(),
        df.value(&dataset, coefficients.view()).to_bits()
    );
    assert_eq!(
        df.rms(&dataset, coefficients.view()).to_bits(),
        df.rms(&dataset, coefficients.view()).to_bits()
    );
}

#[test]
fn test_exact_fit_has_null_error() {
    let coefficients = array![0.5, 2.];
    let dataset: Dataset<f64> = crate::hypothesis::sample_curve(coefficients.view(), 10);
    let df = Quadratic::new();
    assert_eq!(df.value(&dataset, coefficients.view()), 0.);
    assert_eq!(df.rms(&dataset, coefficients.view()), 0.);
}
