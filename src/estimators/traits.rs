use rand::Rng;

use crate::datasets::Dataset;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset. More
/// formally, the model estimates coefficients that minimize an empirical risk
/// (loss function). The random source used to initialize the coefficients is
/// passed explicitly, so that a seeded generator makes the fit reproducible.
pub trait Fit<F, R: Rng + ?Sized, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &Dataset<F>, rng: &mut R) -> Result<Self::Object, E>;
}
