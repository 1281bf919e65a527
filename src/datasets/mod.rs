use ndarray::Array1;

use crate::Float;

mod impl_datasets;


pub use impl_datasets::{generate_sine_dataset, unit_grid};

/// A single observation `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point<F> {
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }
}

/// An ordered sequence of points.
///
/// The order of the points is meaningful: stochastic gradient descent visits
/// them in this order during every epoch. A dataset is never mutated once
/// built, the optimization routines only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    points: Vec<Point<F>>,
}

impl<F: Float> From<Vec<Point<F>>> for Dataset<F> {
    fn from(points: Vec<Point<F>>) -> Self {
        Dataset { points }
    }
}

impl<F: Float> FromIterator<Point<F>> for Dataset<F> {
    fn from_iter<I: IntoIterator<Item = Point<F>>>(iter: I) -> Self {
        Dataset {
            points: iter.into_iter().collect(),
        }
    }
}

impl<F: Float> Dataset<F> {
    /// This method pairs abscissas and ordinates into a dataset. Both arrays
    /// must have the same length.
    pub fn from_xy(xs: &[F], ys: &[F]) -> Result<Self, DatasetError> {
        if xs.len() != ys.len() {
            return Err(DatasetError::ShapeMismatch(xs.len(), ys.len()));
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect())
    }

    /// This method is a getter for the points.
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn n_samples(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// This method returns the abscissas of the dataset.
    pub fn xs(&self) -> Array1<F> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// This method returns the ordinates of the dataset.
    pub fn ys(&self) -> Array1<F> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Error variants raised while assembling a dataset
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("abscissas and ordinates differ in length: {0} != {1}")]
    ShapeMismatch(usize, usize),
}
