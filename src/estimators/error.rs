use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`](crate::estimators::error::EstimatorError) as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
///
/// All of them are raised before the first epoch: training either runs every
/// epoch or does not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// The learning rate must be finite and strictly positive
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f64),
    #[error("cannot fit a polynomial to an empty dataset")]
    EmptyDataset,
    #[error("the coefficient vector must hold at least one coefficient")]
    EmptyCoefficients,
}
