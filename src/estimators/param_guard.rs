use super::traits::Fit;
use crate::datasets::Dataset;
use rand::Rng;
use std::error::Error;

/// Hyperparameters built through a builder and not yet validated, e.g. a
/// learning rate that may still be zero or NaN. Only a successful check hands
/// out the validated set, so nothing is trained with an invalid configuration.
/// Any validated set implementing [`Fit`] makes the builder fittable too,
/// with the check run first.
///
/// `check_ref()` and `check()` must accept and reject the same values.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Validates in place and borrows the validated set
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates and consumes the builder
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Validates and panics on an invalid configuration, for tests and
    /// hard-coded settings
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Fitting an unchecked builder validates it before drawing any coefficient
/// from `rng`. A validation error is converted into the error type of the fit.
impl<F, R: Rng + ?Sized, E, P: ParamGuard> Fit<F, R, E> for P
where
    P::Checked: Fit<F, R, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<F, R, E>>::Object;

    fn fit(&self, dataset: &Dataset<F>, rng: &mut R) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset, rng)
    }
}
