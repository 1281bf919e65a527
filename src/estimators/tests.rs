use approx::assert_abs_diff_eq;
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::EstimatorError;
use super::estimators::PolynomialRegression;
use super::param_guard::ParamGuard;
use super::traits::Fit;
use crate::datasets::{generate_sine_dataset, Dataset, Point};
use crate::helpers::test_helpers::*;
use crate::sgd::initialize_coefficients;

#[test]
fn test_default_params() {
    let params = PolynomialRegression::<f64>::params().check_unwrap();
    assert_eq!(params.learning_rate(), 0.1);
    assert_eq!(params.degree(), 5);
    assert_eq!(params.n_iterations(), 5000);
    assert!(!params.verbose());
}

#[test]
fn test_invalid_learning_rate() {
    for learning_rate in [0., -0.1, f64::NAN, f64::INFINITY] {
        let params = PolynomialRegression::<f64>::params().learning_rate(learning_rate);
        match params.check() {
            Err(EstimatorError::InvalidLearningRate(_)) => {}
            other => panic!("expected an invalid learning rate, got {:?}", other),
        }
    }
}

#[test]
fn test_zero_learning_rate() {
    for learning_rate in [0., -0.] {
        let params = PolynomialRegression::<f64>::params().learning_rate(learning_rate);
        assert!(matches!(
            params.check_ref(),
            Err(EstimatorError::InvalidLearningRate(_))
        ));
    }
    let params = PolynomialRegression::<f64>::params().learning_rate(1e-12);
    assert!(params.check_ref().is_ok());
}

#[test]
fn test_invalid_learning_rate_fails_before_fitting() {
    let dataset = generate_random_data(10, 0);
    let mut rng = StdRng::seed_from_u64(0);
    let res = PolynomialRegression::params()
        .learning_rate(-1.)
        .fit(&dataset, &mut rng);
    assert_eq!(res, Err(EstimatorError::InvalidLearningRate(-1.)));
}

#[test]
fn test_empty_dataset() {
    let dataset = Dataset::<f64>::from(vec![]);
    let mut rng = StdRng::seed_from_u64(0);
    let res = PolynomialRegression::params().fit(&dataset, &mut rng);
    assert_eq!(res, Err(EstimatorError::EmptyDataset));
}

#[test]
fn test_zero_iterations_returns_initialization() {
    let dataset = generate_random_data(20, 1);

    let model = PolynomialRegression::params()
        .degree(3)
        .n_iterations(0)
        .fit(&dataset, &mut StdRng::seed_from_u64(17))
        .unwrap();
    let init = initialize_coefficients::<f64, _>(3, &mut StdRng::seed_from_u64(17));

    assert_eq!(model.errors().len(), 0);
    assert_eq!(model.coefficients(), init.view());
}

#[test]
fn test_coefficients_length() {
    let dataset = generate_random_data(20, 2);
    for degree in [0, 10] {
        let model = PolynomialRegression::params()
            .degree(degree)
            .learning_rate(0.01)
            .n_iterations(3)
            .fit(&dataset, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(model.coefficients().len(), degree + 1);
        assert_eq!(model.errors().len(), 3);
    }
}

#[test]
fn test_fit_reduces_error() {
    let mut rng = StdRng::seed_from_u64(28051998);
    let dataset = generate_sine_dataset::<f64, _>(100, &mut rng);

    let model = PolynomialRegression::params()
        .learning_rate(0.1)
        .degree(5)
        .n_iterations(5000)
        .fit(&dataset, &mut rng)
        .unwrap();

    let errors = model.errors();
    assert_eq!(errors.len(), 5000);
    assert!(errors.iter().all(|e| e.is_finite()));
    assert!(errors[4999] < errors[0]);
    assert_eq!(model.learning_rate(), 0.1);
    assert_eq!(model.degree(), 5);
    assert_eq!(model.n_iterations(), 5000);
}

#[test]
fn test_fit_is_reproducible() {
    let pipeline = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = generate_sine_dataset::<f64, _>(50, &mut rng);
        PolynomialRegression::params()
            .degree(4)
            .n_iterations(200)
            .fit(&dataset, &mut rng)
            .unwrap()
    };

    let first = pipeline(28051998);
    let second = pipeline(28051998);
    assert_eq!(first.errors().len(), second.errors().len());
    for (a, b) in first.errors().iter().zip(second.errors().iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first, second);
}

#[test]
fn test_constant_model_single_point() {
    let dataset = Dataset::from(vec![Point::<f64>::new(0.5, 0.5)]);
    let mut previous_gap = f64::INFINITY;

    for n_iterations in [1, 5, 20, 80] {
        let model = PolynomialRegression::params()
            .degree(0)
            .learning_rate(0.5)
            .n_iterations(n_iterations)
            .fit(&dataset, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let gap = (model.coefficients()[0] - 0.5).abs();
        assert!(gap < previous_gap || gap == 0.);
        previous_gap = gap;
    }
    assert_abs_diff_eq!(previous_gap, 0., epsilon = 1e-12);
}

#[test]
fn test_fit_does_not_mutate_dataset() {
    let dataset = generate_random_data(30, 8);
    let snapshot = dataset.clone();
    let _ = PolynomialRegression::params()
        .n_iterations(10)
        .fit(&dataset, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(dataset, snapshot);
}

#[test]
fn test_model_accessors() {
    let dataset = Dataset::from(vec![Point::new(0., 1.), Point::new(0.5, 2.)]);
    let model = PolynomialRegression::params()
        .degree(1)
        .learning_rate(0.25)
        .n_iterations(1)
        .fit(&dataset, &mut StdRng::seed_from_u64(5))
        .unwrap();

    assert_eq!(model.name(), "D=1 a=0.25");
    assert!(model.function_string().starts_with("y = "));
    assert_eq!(model.predict(0.), model.coefficients()[0]);

    let curve = model.curve(4);
    assert_array_all_close(curve.xs().view(), array![0., 0.25, 0.5, 0.75].view(), 1e-15);
    assert_eq!(curve.points()[2].y, model.predict(0.5));
}
