use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::datasets::Dataset;
use crate::estimators::estimators::PolynomialRegression;
use crate::Float;


/// Error variants raised while writing an export file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize '{path}': {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Abscissas and ordinates of a point cloud, laid out for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointsExport<F> {
    pub x_points: Vec<F>,
    pub y_points: Vec<F>,
}

impl<F: Float> From<&Dataset<F>> for PointsExport<F> {
    fn from(dataset: &Dataset<F>) -> Self {
        PointsExport {
            x_points: dataset.xs().to_vec(),
            y_points: dataset.ys().to_vec(),
        }
    }
}

/// A trained model, its fitted curve and its error trace.
///
/// `x_points` and `y_points` hold the fitted curve sampled on as many
/// abscissas as the training dataset has points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SgdExport<F> {
    pub name: String,
    pub thetas: Vec<F>,
    pub function_str: String,
    pub iterations: usize,
    pub polynomial_degree: usize,
    pub learn_rate: F,
    pub x_points: Vec<F>,
    pub y_points: Vec<F>,
    pub error: Vec<F>,
}

impl<F: Float> SgdExport<F> {
    pub fn new(model: &PolynomialRegression<F>, dataset: &Dataset<F>) -> Self {
        let curve = PointsExport::from(&model.curve(dataset.n_samples()));
        SgdExport {
            name: model.name(),
            thetas: model.coefficients().to_vec(),
            function_str: model.function_string(),
            iterations: model.n_iterations(),
            polynomial_degree: model.degree(),
            learn_rate: model.learning_rate(),
            x_points: curve.x_points,
            y_points: curve.y_points,
            error: model.errors().to_vec(),
        }
    }
}

/// This function writes `value` as pretty-printed JSON to `dir/file_name`,
/// creating `dir` first if it does not exist. It returns the path written.
pub fn write_pretty<T: Serialize + ?Sized>(
    value: &T,
    dir: impl AsRef<Path>,
    file_name: &str,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        ExportError::Serialization {
            path: path.clone(),
            source,
        }
    })?;
    writer.flush().map_err(io_err)?;

    info!("exported {}", path.display());
    Ok(path)
}
