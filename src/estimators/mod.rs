#[cfg(test)]
mod tests;

pub mod error;
pub mod estimators;
pub mod hyperparams;
pub mod param_guard;
pub mod traits;
